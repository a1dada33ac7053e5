//! Plain-text rendering sink for terminals and logs

use std::io::Write;

use crate::catalog;
use crate::core::error::Result;
use crate::render::metrics::SpeciesMetric;
use crate::render::RenderSink;
use crate::simulation::Effect;
use crate::web::{FoodWebGraph, PopulationMap, Trend};

/// Writes food webs as indented text
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn trend_marker(trend: Trend) -> char {
    match trend {
        Trend::Increased => '+',
        Trend::Decreased => '-',
        Trend::Unchanged => ' ',
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn draw(
        &mut self,
        title: &str,
        graph: &FoodWebGraph,
        population: &PopulationMap,
        baseline: &PopulationMap,
    ) -> Result<()> {
        writeln!(self.out, "== {} ==", title)?;
        if graph.is_empty() {
            writeln!(self.out, "  (no species yet - add some cards first)")?;
            return Ok(());
        }

        for species in graph.nodes() {
            let marker = trend_marker(population.trend_from(baseline, species));
            let role = if catalog::is_producer(species) { " [producer]" } else { "" };
            writeln!(
                self.out,
                "  [{}] {} ({}){}",
                marker,
                catalog::label_of(species),
                population.get(species),
                role
            )?;
        }

        if graph.edge_count() > 0 {
            writeln!(self.out, "  links:")?;
            for (prey, predator) in graph.edges() {
                writeln!(self.out, "    {} -> {}", prey, predator)?;
            }
        }
        Ok(())
    }

    fn log(&mut self, effects: &[Effect]) -> Result<()> {
        for effect in effects {
            writeln!(self.out, "  - {}", effect)?;
        }
        Ok(())
    }

    fn metrics(&mut self, metrics: &[SpeciesMetric]) -> Result<()> {
        for m in metrics {
            writeln!(
                self.out,
                "  {:<16} {:>6} ({})",
                catalog::label_of(&m.species),
                m.current,
                m.delta_label()
            )?;
        }
        Ok(())
    }
}
