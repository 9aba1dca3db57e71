use std::io::Write;
use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use log::info;

use fasim_automaton::Automaton;
use fasim_utilities::FasimError;

use demo::DemoAutomaton;
use verbosity::VerbosityFlag;

mod demo;
mod verbosity;

#[derive(clap::Parser, Debug)]
#[command(
    name = "fasim",
    version,
    about = "A command line tool that simulates finite automata symbol by symbol"
)]
struct Cli {
    #[command(flatten)]
    verbosity: VerbosityFlag,

    #[command(subcommand)]
    commands: Commands,
}

/// Defines the subcommands for this tool.
#[derive(Debug, Subcommand)]
enum Commands {
    Run(RunArgs),
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
#[command(about = "Reads the given words in order and prints the active states after every word")]
struct RunArgs {
    automaton: DemoAutomaton,

    /// The words to read, every word continues from the previous configuration.
    words: Vec<String>,

    #[arg(long, help = "Interpret every word as whitespace separated single symbol tokens")]
    tokens: bool,

    #[arg(long, help = "Reset the automaton before reading every word")]
    reset: bool,
}

#[derive(clap::Args, Debug)]
#[command(about = "Prints the transitions of the given automaton")]
struct ShowArgs {
    automaton: DemoAutomaton,
}

fn main() -> Result<ExitCode, FasimError> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    match cli.commands {
        Commands::Run(args) => {
            let mut automaton = Automaton::new(args.automaton.specification());
            info!("Initial states {:?}", automaton.current_states());

            for word in &args.words {
                if args.reset {
                    automaton.reset();
                }

                let states = if args.tokens {
                    let tokens: Vec<&str> = word.split_whitespace().collect();
                    automaton.read(tokens.as_slice())?
                } else {
                    automaton.read(word)?
                };

                let states = format!("{states:?}");
                println!("{word}: {states} accepted: {}", automaton.accepted());
            }
        }
        Commands::Show(args) => {
            let automaton = Automaton::new(args.automaton.specification());
            write_automaton(&mut stdout(), &automaton)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Writes the summary of the automaton followed by one `from --[label]-> to`
/// line for every transition.
fn write_automaton(writer: &mut impl Write, automaton: &Automaton<char>) -> Result<(), FasimError> {
    writeln!(writer, "{automaton}")?;
    writeln!(writer, "Initial state: {}", automaton.initial_state())?;
    writeln!(writer, "Accept states: {:?}", automaton.accept_states())?;

    for (_, state) in automaton.iter_states() {
        for (label, destinations) in state.outgoing() {
            for to in destinations {
                writeln!(writer, "{} --[{label}]-> {}", state.name(), automaton.state(*to).name())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use log::LevelFilter;
    use test_log::test;

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from(["fasim", "-vv", "run", "nfa", "01", "1", "--reset"]).unwrap();

        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Debug);
        match cli.commands {
            Commands::Run(args) => {
                assert_eq!(args.automaton, DemoAutomaton::Nfa);
                assert_eq!(args.words, vec!["01".to_string(), "1".to_string()]);
                assert!(args.reset);
                assert!(!args.tokens);
            }
            Commands::Show(_) => panic!("Expected the run subcommand"),
        }
    }

    #[test]
    fn test_parse_quiet() {
        let cli = Cli::try_parse_from(["fasim", "show", "dfa", "--quiet"]).unwrap();
        assert_eq!(cli.verbosity.log_level_filter(), LevelFilter::Error);

        assert!(Cli::try_parse_from(["fasim", "-q", "-v", "show", "dfa"]).is_err());
    }

    #[test]
    fn test_write_automaton() {
        let automaton = Automaton::new(DemoAutomaton::Nfa.specification());

        let mut buffer: Vec<u8> = Vec::new();
        write_automaton(&mut buffer, &automaton).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Number of states: 4"));
        assert!(output.contains("Initial state: q1"));
        assert!(output.contains("q1 --[1]-> q2"));
        assert!(output.contains("q2 --[epsilon]-> q3"));
        assert_eq!(output.lines().filter(|line| line.contains("--[")).count(), 8);
    }

    #[test]
    fn test_demo_automata() {
        let mut dfa = Automaton::new(DemoAutomaton::Dfa.specification());
        dfa.read("0010").unwrap();
        assert!(!dfa.accepted());

        let mut nfa = Automaton::new(DemoAutomaton::Nfa.specification());
        let tokens: &[&str] = &["1", "0", "1"];
        nfa.read(tokens).unwrap();
        assert!(nfa.accepted());
    }
}
