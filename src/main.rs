fn main() {
    gametree::app::cli::run();
}
