fn main() {
    if let Err(err) = barcode_detector::run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
