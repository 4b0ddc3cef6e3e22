use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recurrence::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Classify point sets by recurring displacement vectors")]
struct Cmd {
    /// Optional ticket label; propagated to logs and provenance
    #[arg(long)]
    ticket: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate a batch (JSON or CSV) and print one classification per subset
    Eval {
        #[arg(long)]
        input: PathBuf,
        /// Also write a JSON result document (plus provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the witnessing displacement and pairs for TRUE subsets
        #[arg(long)]
        explain: bool,
    },
    /// Write a random valid batch as JSON (plus provenance sidecar)
    Gen {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Fixed subset count (default: uniform in [1, 5])
        #[arg(long)]
        subsets: Option<usize>,
        /// Fixed points per subset (default: uniform in [1, 40])
        #[arg(long)]
        points: Option<usize>,
        #[arg(long, default_value_t = recurrence::cfg::COORD_MAX)]
        coord_max: i32,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Eval {
            input,
            out,
            explain,
        } => eval(&input, out.as_deref(), explain, cmd.ticket),
        Action::Gen {
            seed,
            index,
            subsets,
            points,
            coord_max,
            out,
        } => {
            let cfg = GenCfg {
                subsets: subsets.map_or(GenCfg::default().subsets, Count::Fixed),
                points: points.map_or(GenCfg::default().points, Count::Fixed),
                coord_max,
            };
            generate(cfg, ReplayToken { seed, index }, &out, cmd.ticket)
        }
        Action::Report => report(cmd.ticket),
    }
}

/// Result document written by `eval --out`.
#[derive(Serialize)]
struct Outcome {
    results: Vec<Classification>,
    witnesses: Vec<Option<Recurrence>>,
}

impl Outcome {
    fn from_witnesses(witnesses: Vec<Option<Recurrence>>) -> Self {
        Self {
            results: witnesses.iter().map(|w| w.is_some().into()).collect(),
            witnesses,
        }
    }

    fn print(&self, w: &mut impl Write, explain: bool) -> std::io::Result<()> {
        for (c, r) in self.results.iter().zip(&self.witnesses) {
            match r {
                Some(r) if explain => writeln!(
                    w,
                    "{c}\tdisplacement=({}, {}) pairs={:?}",
                    r.key.dx, r.key.dy, r.pairs
                )?,
                _ => writeln!(w, "{c}")?,
            }
        }
        Ok(())
    }
}

fn eval(input: &Path, out: Option<&Path>, explain: bool, ticket: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), ticket = ?ticket, "eval");
    let batch = input::load_batch(input)?;
    let outcome = evaluate_detailed(&batch)
        .map(Outcome::from_witnesses)
        .inspect_err(|e| tracing::error!(error = %e, "rejected"))?;
    outcome.print(&mut std::io::stdout().lock(), explain)?;

    if let Some(out) = out {
        write_json(out, &outcome)?;
        let params = json!({
            "input": input.to_string_lossy(),
            "subsets": outcome.results.len(),
        });
        provenance::write_sidecar(out, Payload::new(params, ticket))?;
    }
    Ok(())
}

fn generate(cfg: GenCfg, tok: ReplayToken, out: &Path, ticket: Option<String>) -> Result<()> {
    tracing::info!(seed = tok.seed, index = tok.index, out = %out.display(), "gen");
    let batch = draw_batch(cfg, tok);
    write_json(out, &batch)?;
    let params = json!({ "cfg": cfg, "replay": tok });
    provenance::write_sidecar(out, Payload::new(params, ticket))?;
    Ok(())
}

fn report(ticket: Option<String>) -> Result<()> {
    let doc = provenance::document(&Payload::new(json!({}), ticket), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn eval_writes_results_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.json");
        std::fs::write(&input, "[[[1,1],[2,2],[1,2],[0,0],[0,1]], [[0,0]]]").unwrap();
        let out = dir.path().join("out/results.json");
        eval(&input, Some(out.as_path()), false, None).unwrap();

        let doc: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["results"], json!(["TRUE", "FALSE"]));
        assert_eq!(doc["witnesses"][0]["key"], json!({"dx": 1, "dy": 1}));
        assert!(doc["witnesses"][1].is_null());
        assert!(dir.path().join("out/results.provenance.json").exists());
    }

    #[test]
    fn eval_rejects_out_of_bounds_batch() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.json");
        std::fs::write(&input, "[[[0,0]], [[3,51]]]").unwrap();
        let out = dir.path().join("results.json");
        let err = eval(&input, Some(out.as_path()), false, None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BoundsError>(),
            Some(&BoundsError::Coordinate {
                subset: 1,
                point: 0
            })
        );
        assert!(!out.exists());
    }

    #[test]
    fn explain_prints_witness() {
        let outcome = Outcome::from_witnesses(vec![
            find_recurrence(&[Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)]),
            None,
        ]);
        let mut buf = Vec::new();
        outcome.print(&mut buf, true).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "TRUE\tdisplacement=(1, 0) pairs=[(0, 1), (1, 2), (2, 3)]\nFALSE\n"
        );
    }

    #[test]
    fn gen_output_round_trips_through_eval() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("batch.json");
        let cfg = GenCfg {
            subsets: Count::Fixed(3),
            ..GenCfg::default()
        };
        let tok = ReplayToken { seed: 9, index: 2 };
        generate(cfg, tok, &out, Some("t".into())).unwrap();
        let loaded = input::load_batch(&out).unwrap();
        assert_eq!(loaded, draw_batch(cfg, tok));
        assert_eq!(evaluate(&loaded).unwrap().len(), 3);
        assert!(dir.path().join("batch.provenance.json").exists());
    }
}
