//! Food Web Lab - Entry Point
//!
//! Interactive terminal classroom. Students place species cards, draw
//! prey -> predator arrows, shock one species and read what happened, then
//! score their web and answer the concept quiz.

use food_web_lab::assessment::{self, ComplexityRating, QuizVerdict, QUESTIONS};
use food_web_lab::core::config::{self, LabConfig};
use food_web_lab::core::error::{LabError, Result};
use food_web_lab::ecosystem::load_preset;
use food_web_lab::render::{RenderSink, TextRenderer};
use food_web_lab::session::ClassroomState;
use food_web_lab::simulation::ShockSpec;

use std::io::{self, Write};
use std::path::Path;

/// Environment variable naming an optional TOML config file
const CONFIG_ENV: &str = "FOOD_WEB_LAB_CONFIG";

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_web_lab=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    tracing::info!("Food Web Lab starting...");

    load_config()?;
    let mut state = ClassroomState::default();
    let mut renderer = TextRenderer::new(io::stdout());

    println!("\n=== FOOD WEB LAB ===");
    println!("Build a food web, shock one species, and see how the others respond.");
    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if let Err(e) = handle_command(input, &mut state, &mut renderer) {
            match e {
                LabError::IoError(_) => return Err(e),
                _ => {
                    tracing::warn!("Rejected '{}': {}", input, e);
                    println!("{}", e);
                }
            }
        }
    }

    println!(
        "\nGoodbye! Final model: {} species, {} links.",
        state.model().node_count(),
        state.model().edge_count()
    );
    Ok(())
}

/// Install a config from the file named by `FOOD_WEB_LAB_CONFIG`, if any
fn load_config() -> Result<()> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Ok(());
    };

    let text = std::fs::read_to_string(&path)?;
    let cfg: LabConfig = toml::from_str(&text)?;
    cfg.validate()?;
    if config::set_config(cfg).is_err() {
        tracing::warn!("Config already initialised, ignoring {}", path);
    } else {
        tracing::info!("Loaded config from {}", path);
    }
    Ok(())
}

fn handle_command<W: Write>(
    input: &str,
    state: &mut ClassroomState,
    renderer: &mut TextRenderer<W>,
) -> Result<()> {
    let mut words = input.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    match (command, args.as_slice()) {
        ("help" | "h", _) => print_help(),

        // --- Stage 1: build the model ---
        ("species", _) => {
            println!("Cards you can still add:");
            for entry in state.available_species() {
                println!("  {}", entry.card_label());
            }
        }
        ("add", [name]) => {
            let species = state.add_species(name)?;
            println!("Added '{}'. Now connect it to something!", species);
        }
        ("connect", [prey, predator]) => {
            state.connect(prey, predator)?;
            println!("{} -> {} linked!", prey, predator);
        }
        ("load", [path]) => {
            let preset = load_preset(Path::new(path))?;
            state.load_model(&preset);
            println!("Loaded '{}' as your model.", preset.name);
        }
        ("show", _) => {
            renderer.draw(
                "My food web",
                state.model(),
                state.model_population(),
                state.model_population(),
            )?;
            if state.model().edge_count() > 0 {
                println!("Model ready! Try 'shock <species> remove'.");
            }
        }

        // --- Stage 2: experiment ---
        ("shock", [target, shock]) => {
            let shock: ShockSpec = shock.parse()?;
            check_step(shock, state.config().percent_step)?;

            let active = state.active_ecosystem();
            if active.is_fallback {
                println!(
                    "No links yet - running on '{}' instead. Draw arrows to use your own model!",
                    active.preset.name
                );
            }

            let record = state.run_experiment(target, shock)?;
            renderer.draw(
                "Before",
                &record.ecosystem.graph,
                &record.baseline,
                &record.baseline,
            )?;
            renderer.draw(
                "After",
                &record.ecosystem.graph,
                &record.result.population,
                &record.baseline,
            )?;
            println!("What happened:");
            renderer.log(&record.result.effects)?;
            println!("Changes:");
            renderer.metrics(&record.metrics())?;
        }
        ("log", _) => match state.last_experiment() {
            Some(record) => renderer.log(&record.result.effects)?,
            None => println!("No experiment yet. Try 'shock <species> -50'."),
        },

        // --- Stage 3: score and quiz ---
        ("score", _) => match state.complexity() {
            Some(report) => {
                println!(
                    "{} species, {} links: {}",
                    report.species,
                    report.links,
                    report.verdict()
                );
                if report.rating == ComplexityRating::ComplexWeb {
                    println!("Congratulations! Lots of links make a sturdy ecosystem.");
                }
            }
            None => println!("Build a model with at least one link first."),
        },
        ("quiz", []) => {
            for (i, q) in QUESTIONS.iter().enumerate() {
                println!("Question {}: {}", i + 1, q.prompt);
                for (j, choice) in q.choices.iter().enumerate() {
                    println!("  {}. {}", j + 1, choice);
                }
            }
            println!("Answer with 'quiz <question> <choice>'.");
        }
        ("quiz", [question, choice]) => {
            let (Ok(question), Ok(choice)) = (question.parse::<usize>(), choice.parse::<usize>())
            else {
                println!("Usage: quiz <question> <choice>");
                return Ok(());
            };
            match assessment::check(question, choice) {
                QuizVerdict::Correct(msg) | QuizVerdict::Incorrect(msg) => println!("{}", msg),
                QuizVerdict::OutOfRange => println!("No such question or choice."),
            }
        }

        ("reset", _) => {
            state.reset();
            println!("Everything cleared. Start a new model!");
        }

        _ => println!("Unknown command. Type 'help' for the list."),
    }
    Ok(())
}

/// Percent shocks must land on the slider's step
fn check_step(shock: ShockSpec, step: i32) -> Result<()> {
    match shock {
        ShockSpec::AdjustByPercent(p) if p % step != 0 => Err(LabError::InvalidPercent(p)),
        _ => Ok(()),
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  species                   - List species cards still available");
    println!("  add <species>             - Add a card to your model");
    println!("  connect <prey> <predator> - Draw an arrow from food to eater");
    println!("  load <file.toml>          - Use an ecosystem preset as your model");
    println!("  show                      - Show your model");
    println!("  shock <species> remove    - Remove a species entirely");
    println!("  shock <species> <percent> - Change a species by -100..100 (steps of 10)");
    println!("  log                       - Show the last experiment's log");
    println!("  score                     - Rate how complex your web is");
    println!("  quiz [<question> <choice>] - Concept quiz");
    println!("  reset                     - Start over");
    println!("  quit / q                  - Exit");
    println!();
}
