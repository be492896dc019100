//! Genetic solver configuration.

/// Parameters for the genetic solver.
///
/// # Defaults
///
/// ```
/// use knapsack_optim::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_optim::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of chromosomes in the population.
    pub population_size: usize,

    /// Number of generations to evolve.
    pub generations: usize,

    /// Per-bit flip probability applied to each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population copied unchanged into the next
    /// generation (0.0–1.0). Elites are what make best-fitness-so-far
    /// non-decreasing across generations.
    pub elite_ratio: f64,

    /// Tournament size: how many candidates are sampled (without
    /// replacement) from the top half of the population per parent pick.
    pub tournament_size: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Fitness is a pure function of the chromosome and consumes no RNG
    /// state, so this changes wall-clock time only, never results.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            elite_ratio: 0.25,
            tournament_size: 3,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k.max(1);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        let elite_count = (self.population_size as f64 * self.elite_ratio) as usize;
        if elite_count >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 100);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.elite_ratio - 0.25).abs() < 1e-10);
        assert_eq!(config.tournament_size, 3);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(80)
            .with_generations(200)
            .with_mutation_rate(0.05)
            .with_elite_ratio(0.1)
            .with_tournament_size(5)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 80);
        assert_eq!(config.generations, 200);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.elite_ratio - 0.1).abs() < 1e-10);
        assert_eq!(config.tournament_size, 5);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default().with_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_elite_too_high() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_ratio(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_mutation_rate(2.0)
            .with_elite_ratio(-0.5);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        assert!((config.elite_ratio - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_tournament_size_floor() {
        assert_eq!(GaConfig::default().with_tournament_size(0).tournament_size, 1);
    }
}
