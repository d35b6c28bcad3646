//! Text-mode confetti for the completion moment.
//!
//! A burst is generated once, from the `CountdownCompleted` event, and is
//! reproducible for a given seed.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

const GLYPHS: [char; 6] = ['♥', '✦', '*', '+', '·', 'o'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    pub column: u16,
    pub row: u16,
    pub glyph: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebration {
    width: u16,
    height: u16,
    particles: Vec<Particle>,
}

impl Celebration {
    /// Scatter `count` particles over a `width` x `height` field.
    pub fn burst(count: usize, width: u16, height: u16, seed: u64) -> Self {
        let mut rng = Mcg128Xsl64::seed_from_u64(seed);
        let particles = if width == 0 || height == 0 {
            Vec::new()
        } else {
            (0..count)
                .map(|_| Particle {
                    column: rng.gen_range(0..width),
                    row: rng.gen_range(0..height),
                    glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                })
                .collect()
        };
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One string per row. Later particles overwrite earlier ones.
    pub fn render(&self) -> Vec<String> {
        let mut grid = vec![vec![' '; self.width as usize]; self.height as usize];
        for p in &self.particles {
            grid[p.row as usize][p.column as usize] = p.glyph;
        }
        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}
