use greeter::presentation::cli::run;

fn main() {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if run(&args).is_err() {
        std::process::exit(1);
    }
}
