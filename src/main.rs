fn main() {
    // Run the CLI
    std::process::exit(sectionize::cli::run());
}
