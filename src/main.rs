use halachabench_dashboard::{cli, telemetry};

fn main() {
    telemetry::init_tracing();

    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}
