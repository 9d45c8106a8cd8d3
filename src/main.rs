mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use ojcli::client::{ClientError, JudgeClient, UhuntClient};
use ojcli::config::Config;
use ojcli::render::style::colorize;
use ojcli::render::table::BorderStyle;
use ojcli::{codes, report};
use rand::Rng;
use std::collections::HashSet;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    let border = if cli.ascii {
        BorderStyle::Ascii
    } else {
        BorderStyle::Double
    };

    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    let uhunt = UhuntClient::new().unwrap_or_else(|e| fail(e));

    match cli.command {
        Commands::Submit {
            files,
            problem,
            language,
        } => {
            // Dedupe while keeping the given order.
            let mut seen = HashSet::new();
            let files: Vec<PathBuf> = files.into_iter().filter(|f| seen.insert(f.clone())).collect();
            let first = files[0].clone();

            let language_name = match language.or_else(|| {
                codes::guess_language(&first).map(str::to_string)
            }) {
                Some(name) => name,
                None => {
                    eprintln!(
                        "No language specified, and the extension of {} is not recognized",
                        first.display()
                    );
                    std::process::exit(1);
                }
            };
            let language_code = match codes::language_code(&language_name) {
                Some(code) => code,
                None => {
                    eprintln!("Unknown language: {language_name}");
                    std::process::exit(1);
                }
            };

            let problem = match problem.or_else(|| {
                first
                    .file_stem()
                    .and_then(|stem| stem.to_string_lossy().parse().ok())
            }) {
                Some(number) => number,
                None => {
                    eprintln!(
                        "No problem number given, and the filename {} does not contain one",
                        first.display()
                    );
                    std::process::exit(1);
                }
            };

            let judge = JudgeClient::new().unwrap_or_else(|e| fail(e));
            judge
                .login(&config.user.username, &config.user.password)
                .unwrap_or_else(|e| fail(e));
            let reply = judge
                .submit(problem, language_code, &files)
                .unwrap_or_else(|e| fail(e));
            print!("{reply}");
        }

        Commands::Verdict {
            problem,
            limit,
            all,
        } => {
            let user_id = resolve_user(&uhunt, &config);
            let problems = uhunt.problems().unwrap_or_else(|e| fail(e));
            let rows = match problem {
                Some(number) => uhunt.submissions_for_problem(user_id, number),
                None => {
                    let limit = if all { None } else { Some(limit.unwrap_or(25)) };
                    uhunt.submissions(user_id, limit)
                }
            }
            .unwrap_or_else(|e| fail(e));

            if rows.is_empty() {
                println!("No submissions found.");
                return;
            }
            print_report(&report::verdict_report(&rows, &problems, border));
        }

        Commands::Rank {
            above,
            below,
            surround,
            next,
        } => {
            let user_id = resolve_user(&uhunt, &config);
            let (above, below) = match surround {
                Some(n) => (n, n),
                None => (above.unwrap_or(0), below.unwrap_or(0)),
            };
            let rows = uhunt
                .ranklist(user_id, above, below)
                .unwrap_or_else(|e| fail(e));
            if rows.is_empty() {
                println!("No ranklist data found.");
                return;
            }
            print_report(&report::rank_report(&rows, user_id, border));

            if let Some(next) = next.filter(|&n| n > 0) {
                let window = uhunt
                    .ranklist(user_id, next, 0)
                    .unwrap_or_else(|e| fail(e));
                if let (Some(first), Some(last)) = (window.first(), window.last()) {
                    let needed = first.ac.saturating_sub(last.ac);
                    println!(
                        "Need {} more accepted solutions to reach rank {}.",
                        colorize(&needed.to_string(), "green"),
                        first.rank
                    );
                    println!();
                }
            }
        }

        Commands::Random { volume } => {
            let mut rng = rand::thread_rng();
            let (volume, size) = match volume {
                Some(v) => match codes::volume_size(v) {
                    Some(size) => (v, size),
                    None => {
                        eprintln!("Invalid volume selection!");
                        std::process::exit(1);
                    }
                },
                None => codes::VOLUMES[rng.gen_range(0..codes::VOLUMES.len())],
            };
            let number = volume * 100 + rng.gen_range(0..size);

            let problem = uhunt.problem_by_number(number).unwrap_or_else(|e| fail(e));
            println!("Selected problem {} - {}", problem.number, problem.title);
            println!(
                "https://onlinejudge.org/external/{}/{}.pdf",
                volume, problem.number
            );
        }

        Commands::Progress { volume } => {
            if let Some(v) = volume {
                if codes::volume_size(v).is_none() {
                    eprintln!("Invalid volume selection!");
                    std::process::exit(1);
                }
            }
            let user_id = resolve_user(&uhunt, &config);
            let problems = uhunt.problems().unwrap_or_else(|e| fail(e));
            let rows = uhunt.submissions(user_id, None).unwrap_or_else(|e| fail(e));

            let entries = report::progress_counters(&rows, &problems);
            match report::progress_report(&entries, volume) {
                Some(lines) => print_report(&lines),
                None => {
                    eprintln!("Invalid volume selection!");
                    std::process::exit(1);
                }
            }
        }

        Commands::Stats {
            submissions,
            languages,
        } => {
            let (submissions, languages) = if !submissions && !languages {
                (true, true)
            } else {
                (submissions, languages)
            };
            let user_id = resolve_user(&uhunt, &config);
            let rows = uhunt.submissions(user_id, None).unwrap_or_else(|e| fail(e));

            if rows.is_empty() {
                println!("No submissions found.");
                return;
            }
            print_report(&report::stats_report(&rows, submissions, languages));
        }
    }
}

fn resolve_user(uhunt: &UhuntClient, config: &Config) -> u64 {
    uhunt
        .user_id(&config.user.username)
        .unwrap_or_else(|e| fail(e))
}

fn fail(error: ClientError) -> ! {
    eprintln!("Error: {error}");
    std::process::exit(1);
}

/// Prints a rendered report framed by one blank line on each side.
fn print_report(lines: &[String]) {
    println!();
    for line in lines {
        println!("{line}");
    }
    println!();
}
