use std::process;

fn main() {
    env_logger::init();

    if let Err(err) = pattern_parser::run() {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}
