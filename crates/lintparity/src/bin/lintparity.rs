fn main() {
    if let Err(err) = lintparity::run() {
        eprintln!("{}", lintparity::format_error(&err));
        std::process::exit(1);
    }
}
