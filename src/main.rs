fn main() {
    std::process::exit(hdvl::app::startup::startup());
}
