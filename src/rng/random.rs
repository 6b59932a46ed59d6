//! Composition factory
//!
//! [`Random`] wraps whichever primitive generator the host supports and
//! attaches the two extras every top-level generator carries: an
//! `insecure` sibling for speed, and `create_with_seeds` (inherited from
//! [`RandomGenerator`]).
//!
//! Source selection is an explicit ordered list of constructor attempts
//! (see [`FactoryConfig::sources`] and [`create_random_from`]). Each
//! attempt returns a `Result`; the first success wins and every failure is
//! logged before moving on. When
//! nothing succeeds, an entropy-seeded [`Alea`] generator is used, so
//! construction itself never fails.

use std::fmt;

use tracing::{debug, warn};

use crate::error::Result;
use crate::rng::alea::Alea;
use crate::rng::config::FactoryConfig;
use crate::rng::entropy::EntropyCollector;
use crate::rng::generator::RandomGenerator;
use crate::rng::host_generator::HostRandomGenerator;
use crate::rng::os_generator::OsRandomGenerator;

/// The kinds of primitive source the factory knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Operating system secure bytes ([`OsRandomGenerator`]).
    Os,
    /// Host secure 32-bit values ([`HostRandomGenerator`]).
    Host,
    /// Entropy-seeded [`Alea`]; insecure.
    Seeded,
    /// A caller-supplied generator passed to [`Random::compose`].
    Custom,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Os => "os",
            SourceKind::Host => "host",
            SourceKind::Seeded => "seeded",
            SourceKind::Custom => "custom",
        };

        f.write_str(name)
    }
}

/// A boxed primitive generator, as produced by a [`Constructor`].
pub type BoxedGenerator = Box<dyn RandomGenerator + Send>;

/// A complete generator: primitive source, derived operations, insecure
/// sibling and seeded-generator construction.
///
/// ```
/// use fortuity::{create_random, RandomGenerator};
///
/// let mut random = create_random();
/// let id = random.id();
/// assert_eq!(id.len(), 17);
///
/// let fast = random.insecure().fraction();
/// assert!((0.0..1.0).contains(&fast));
/// ```
pub struct Random {
    generator: BoxedGenerator,
    kind: SourceKind,
    insecure: Alea,
}

impl Random {
    /// Wraps an arbitrary primitive generator.
    pub fn compose<G>(generator: G) -> Self
    where
        G: RandomGenerator + Send + 'static,
    {
        Self::assemble(
            Box::new(generator),
            SourceKind::Custom,
            &EntropyCollector::default(),
        )
    }

    fn assemble(generator: BoxedGenerator, kind: SourceKind, collector: &EntropyCollector) -> Self {
        Self {
            generator,
            kind,
            insecure: Alea::new(collector.collect()),
        }
    }

    /// Which source backs this generator.
    pub fn source(&self) -> SourceKind {
        self.kind
    }

    /// The fast, non-cryptographic sibling generator.
    pub fn insecure(&mut self) -> &mut Alea {
        &mut self.insecure
    }
}

impl fmt::Debug for Random {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Random")
            .field("source", &self.kind)
            .finish_non_exhaustive()
    }
}

impl RandomGenerator for Random {
    fn fraction(&mut self) -> f64 {
        self.generator.fraction()
    }

    fn hex_string(&mut self, digits: usize) -> String {
        self.generator.hex_string(digits)
    }

    fn uuid(&mut self) -> String {
        self.generator.uuid()
    }
}

/// A constructor attempt the factory can try.
///
/// It receives the factory's entropy collector, which seeded sources use.
pub type Constructor = fn(&EntropyCollector) -> Result<BoxedGenerator>;

/// Creates a generator with the default source order.
pub fn create_random() -> Random {
    build(&FactoryConfig::default())
}

/// Creates a generator with an explicit configuration.
///
/// Fails only if the configuration itself is invalid.
pub fn create_random_with(config: &FactoryConfig) -> Result<Random> {
    config.validate()?;

    Ok(build(config))
}

/// Creates a generator from an explicit list of constructor attempts.
///
/// Attempts run in order and the first success wins. When every attempt
/// fails, an Alea generator seeded from `config`'s entropy collector is
/// used. `config.sources` is ignored.
pub fn create_random_from(
    attempts: &[(SourceKind, Constructor)],
    config: &FactoryConfig,
) -> Random {
    let collector = config.collector();

    for &(kind, construct) in attempts {
        match construct(&collector) {
            Ok(generator) => {
                debug!(source = %kind, "selected random source");
                return Random::assemble(generator, kind, &collector);
            }
            Err(error) => {
                warn!(source = %kind, %error, "random source unavailable, trying next");
            }
        }
    }

    warn!("no secure random source available, falling back to seeded alea");
    Random::assemble(
        Box::new(Alea::new(collector.collect())),
        SourceKind::Seeded,
        &collector,
    )
}

fn build(config: &FactoryConfig) -> Random {
    let attempts: Vec<(SourceKind, Constructor)> = config
        .sources
        .iter()
        .filter_map(|&kind| constructor(kind).map(|construct| (kind, construct)))
        .collect();

    create_random_from(&attempts, config)
}

fn constructor(kind: SourceKind) -> Option<Constructor> {
    let construct: Constructor = match kind {
        SourceKind::Os => os_source,
        SourceKind::Host => host_source,
        SourceKind::Seeded => seeded_source,
        // Only Random::compose produces custom generators.
        SourceKind::Custom => return None,
    };

    Some(construct)
}

fn os_source(_: &EntropyCollector) -> Result<BoxedGenerator> {
    Ok(Box::new(OsRandomGenerator::new()?))
}

fn host_source(_: &EntropyCollector) -> Result<BoxedGenerator> {
    Ok(Box::new(HostRandomGenerator::new()?))
}

fn seeded_source(collector: &EntropyCollector) -> Result<BoxedGenerator> {
    Ok(Box::new(Alea::new(collector.collect())))
}
