fn main() {
    hostprov::app::cli::run();
}
