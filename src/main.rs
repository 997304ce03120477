fn main() {
    fvctl::app::cli::run();
}
