use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use udaipur_guide::guide::{farewell_lines, TOPICS};
use udaipur_guide::{install_quiet_panic_hook, GuideConfig, LocalGuide};

const EXIT_COMMANDS: &[&str] = &["quit", "exit", "bye", "q"];
const HELP_COMMANDS: &[&str] = &["help", "h", "?"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("udaipur_guide=warn".parse()?))
        .init();
    install_quiet_panic_hook();

    let args: Vec<String> = env::args().collect();

    let mut config = GuideConfig::from_env();
    let mut one_shot: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--knowledge" | "-k" => {
                if i + 1 < args.len() {
                    config.knowledge_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--query" | "-q" => {
                if i + 1 < args.len() {
                    one_shot = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(2);
            }
        }
        i += 1;
    }

    config.validate()?;
    let guide = LocalGuide::from_config(&config);

    if let Some(query) = one_shot {
        println!("{}", guide.answer(&query));
        return Ok(());
    }

    let guide = Arc::new(guide);
    let city = config.city_name.clone();
    let repl = tokio::task::spawn_blocking({
        let city = city.clone();
        move || run_repl(&guide, &city)
    });

    tokio::select! {
        result = repl => result??,
        _ = tokio::signal::ctrl_c() => {
            println!();
            print_farewell(&city);
            // The REPL thread is parked in a stdin read; the runtime would wait on it.
            std::process::exit(0);
        }
    }

    Ok(())
}

fn run_repl(guide: &LocalGuide, city: &str) -> anyhow::Result<()> {
    print_welcome(city);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("\n🤔 Ask me about {}: ", city);
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            print_farewell(city);
            break;
        }

        let input = line.trim();
        let command = input.to_lowercase();

        if EXIT_COMMANDS.contains(&command.as_str()) {
            print_farewell(city);
            break;
        }

        if input.is_empty() {
            println!("💭 Please enter a question, or type 'quit' to exit.");
            println!("   Try asking: 'What does Khamma Ghani mean?' or 'Best food in Surajpole?'");
            continue;
        }

        if HELP_COMMANDS.contains(&command.as_str()) {
            print_help();
            continue;
        }

        println!("\n🤖 Guide: {}", guide.answer(input));
        println!("{}", "-".repeat(50));
    }

    Ok(())
}

fn print_welcome(city: &str) {
    println!("🏰 Welcome to the {} Local Guide! 🏰", city);
    println!("I can help you with:");
    for (_, description) in TOPICS {
        println!("  • {}", description);
    }
    println!("\nType 'quit', 'exit', or 'bye' to exit.");
    println!("{}", "=".repeat(50));
}

fn print_help() {
    println!("\n📚 I can help you with:");
    println!("  • Language: 'What does Khamma Ghani mean?'");
    println!("  • Food: 'Best food in Hathipole?' or 'What is Dal Baati Churma?'");
    println!("  • Tourism: 'When to visit City Palace?' or 'Transportation to heritage areas?'");
    println!("  • Culture: 'Temple etiquette?' or 'How to greet locals respectfully?'");
}

fn print_farewell(city: &str) {
    println!();
    for line in farewell_lines(city) {
        println!("{}", line);
    }
}

fn print_usage() {
    println!("Udaipur Local Guide");
    println!();
    println!("USAGE:");
    println!("    udaipur-guide [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -k, --knowledge <PATH>   Knowledge file (JSON), default from GUIDE_KNOWLEDGE_PATH");
    println!("    -q, --query <TEXT>       Answer one question and exit");
    println!("        --help               Print this help");
}
