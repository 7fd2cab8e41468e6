//! fcdump: inspect FontManager control strings.

use fcdump::{read_input, run, Command, DumpConfig};

fn main() {
    fcdump::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("fcdump {}", env!("CARGO_PKG_VERSION"));
        }
        name => {
            let Some(command) = Command::parse(name) else {
                eprintln!("Unknown command: {name}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            };

            let config = match DumpConfig::from_args(&args[2..]) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            };
            let bytes = match read_input(&config.input) {
                Ok(bytes) => bytes,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("Usage: fcdump {name} [options] <hex bytes | @file>");
                    std::process::exit(1);
                }
            };

            let report = run(command, &bytes, &config);
            print!("{}", report.output);
            if let Some(err) = report.error {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("fcdump: FontManager control string inspector");
    println!();
    println!("Usage: fcdump <command> [options] <hex bytes | @file>");
    println!();
    println!("Commands:");
    println!("  decode              List decoded tokens with their byte spans");
    println!("  size                Measure the string, optionally up to a limit");
    println!("  paint               Print the draw calls for the string");
    println!("  locate              Map an offset to a pen position or back");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Decode options:");
    println!("  --length=<n>        Declared string length (default: until terminator)");
    println!("  --max-length=<n>    Cap on the declared length");
    println!("  --base=<addr>       Address of the first byte, for matrix alignment");
    println!("  --trace             Log each decoded token (also FC_TRACE=1)");
    println!();
    println!("Layout options:");
    println!("  --pitch=<mp>        Glyph advance of the stand-in font (default: 8000)");
    println!("  --height=<mp>       Glyph height of the stand-in font (default: 16000)");
    println!("  --word=<x>,<y>      Extra space after each space character");
    println!("  --char=<x>,<y>      Extra space after every character");
    println!("  --limit=<x>,<y>     Size limit");
    println!("  --split=<code>      Split character for size");
    println!("  --offset=<n>        Locate the pen position at a byte offset");
    println!("  --point=<x>,<y>     Locate the caret nearest a point");
    println!();
    println!("Numbers are decimal or 0x-prefixed hex. Set RUST_LOG for diagnostics.");
}
