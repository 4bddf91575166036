use crate::error::{Error, Result};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufWriter};
use std::num::NonZeroU32;
use std::path::Path;
use tracing::debug;

/// Buffer size in bytes
const BUFFER_SIZE_IN_BYTES: usize = 1024 * 10; // 10 KiB

/// Where the samples are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Real numbers in `[0, 1)`.
    Unit,
    /// Faces `1..=sides` of a fair die.
    Die(NonZeroU32),
}

impl Domain {
    /// Bounds written on the second header line.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            Domain::Unit => (0, 1),
            Domain::Die(sides) => (1, sides.get()),
        }
    }
}

/// What one run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Samples {
    pub count: usize,
    pub domain: Domain,
    /// Emit the `<count>` / `<lo> <hi>` header lines.
    pub header: bool,
}

impl Samples {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            domain: Domain::Unit,
            header: true,
        }
    }

    pub fn domain(self, domain: Domain) -> Self {
        Self { domain, ..self }
    }

    pub fn header(self, header: bool) -> Self {
        Self { header, ..self }
    }
}

/// Random source for one run. Seeded from OS entropy unless `seed` is given.
pub fn sample_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Write the header and `samples.count` values to `out`.
///
/// ```text
/// <count>
/// <lo> <hi>
/// <sample>   (count times)
/// ```
pub fn write_samples<W, R>(samples: &Samples, out: &mut W, rng: &mut R) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    let (lo, hi) = samples.domain.bounds();
    if samples.header {
        writeln!(out, "{}", samples.count)?;
        writeln!(out, "{} {}", lo, hi)?;
    }

    match samples.domain {
        Domain::Unit => {
            let uniform = Uniform::new(f64::from(lo), f64::from(hi));
            for _ in 0..samples.count {
                let random_number: f64 = uniform.sample(rng);
                writeln!(out, "{}", lexical::to_string(random_number))?;
            }
        }
        Domain::Die(_) => {
            let uniform = Uniform::new_inclusive(lo, hi);
            for _ in 0..samples.count {
                writeln!(out, "{}", uniform.sample(rng))?;
            }
        }
    }
    Ok(())
}

/// Create (or truncate) `path` and fill it with `samples`.
///
/// The file is closed on every return path. On a write error whatever was
/// already flushed stays on disk.
pub fn generate<R>(samples: &Samples, path: &Path, rng: &mut R) -> Result<()>
where
    R: Rng + ?Sized,
{
    debug!(?samples, path = %path.display(), "generating samples");

    let file = File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut f = BufWriter::with_capacity(BUFFER_SIZE_IN_BYTES, file);

    write_samples(samples, &mut f, rng)
        .and_then(|()| f.flush())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(count = samples.count, path = %path.display(), "samples written");
    Ok(())
}
