fn main() {
    std::process::exit(rephraser_cli::run());
}
