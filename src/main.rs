fn main() {
    if let Err(err) = greetings::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
