//! The evolutionary loop.

use super::config::GaConfig;
use super::types::Chromosome;
use crate::catalog::Item;
use crate::solution::SelectionResult;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Result of a genetic solve.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// Decoded best selection. Empty when no feasible non-empty individual
    /// was ever produced.
    pub selection: SelectionResult,

    /// Fitness of the best individual ever seen.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness seen so far, recorded after initialization and after
    /// each generation (`generations + 1` entries). Non-decreasing: elites
    /// are copied forward verbatim, so the best individual never dies.
    pub fitness_history: Vec<f64>,
}

/// Runs the genetic solver.
///
/// Each generation: score everyone, sort descending by fitness, copy the
/// elite fraction unchanged, then fill the remainder with offspring —
/// parents picked by tournament from the top half, recombined by
/// single-point crossover, mutated bit by bit.
///
/// Total over valid input: never fails, degenerates to the empty selection
/// when nothing feasible is found. With a fixed `seed` the run is
/// reproducible bit for bit.
///
/// # Panics
/// Panics if the configuration is invalid (call [`GaConfig::validate`]
/// first to get a descriptive error).
pub fn solve_genetic(items: &[Item], capacity: f64, config: &GaConfig) -> GaResult {
    config.validate().expect("invalid GaConfig");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let n = items.len();

    let mut population: Vec<Chromosome> = (0..config.population_size)
        .map(|_| Chromosome::random(n, &mut rng))
        .collect();
    evaluate_population(items, capacity, &mut population, config.parallel);

    let mut best = best_of(&population).clone();
    let mut fitness_history = Vec::with_capacity(config.generations + 1);
    fitness_history.push(best.fitness);

    let elite_count = (config.population_size as f64 * config.elite_ratio) as usize;

    for generation in 0..config.generations {
        // Best first
        population.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

        let mut next_gen: Vec<Chromosome> = population[..elite_count].to_vec();

        while next_gen.len() < config.population_size {
            let p1 = tournament(&population, config.tournament_size, &mut rng);
            let p2 = tournament(&population, config.tournament_size, &mut rng);

            let (mut c1, mut c2) = crossover(&population[p1], &population[p2], &mut rng);
            mutate(&mut c1, config.mutation_rate, &mut rng);
            mutate(&mut c2, config.mutation_rate, &mut rng);
            next_gen.push(c1);
            next_gen.push(c2);
        }
        next_gen.truncate(config.population_size);

        // Elites keep their cached fitness
        evaluate_slice(items, capacity, &mut next_gen[elite_count..], config.parallel);
        population = next_gen;

        let gen_best = best_of(&population);
        if gen_best.fitness > best.fitness {
            best = gen_best.clone();
        }
        fitness_history.push(best.fitness);

        debug!(
            "genetic generation {}/{}: best fitness {}",
            generation + 1,
            config.generations,
            best.fitness
        );
    }

    let selection = if best.fitness > 0.0 {
        SelectionResult::from_items(best.decode(items))
    } else {
        SelectionResult::empty()
    };

    GaResult {
        selection,
        best_fitness: best.fitness,
        generations: config.generations,
        fitness_history,
    }
}

/// Tournament selection over the top half of a fitness-sorted population:
/// sample `k` distinct candidates, return the index of the fittest.
fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    let half = (population.len() / 2).max(1);
    let k = k.clamp(1, half);
    rand::seq::index::sample(rng, half, k)
        .into_iter()
        .max_by(|&a, &b| population[a].fitness.total_cmp(&population[b].fitness))
        .expect("tournament sample is non-empty")
}

/// Single-point crossover at a uniformly random cut in `[1, n-1]`.
///
/// With fewer than two bits there is no interior cut point; the parents
/// are cloned unchanged.
fn crossover<R: Rng>(p1: &Chromosome, p2: &Chromosome, rng: &mut R) -> (Chromosome, Chromosome) {
    let n = p1.bits.len();
    if n < 2 {
        return (p1.clone(), p2.clone());
    }
    let point = rng.random_range(1..n);

    let mut c1 = p1.bits[..point].to_vec();
    c1.extend_from_slice(&p2.bits[point..]);
    let mut c2 = p2.bits[..point].to_vec();
    c2.extend_from_slice(&p1.bits[point..]);

    (
        Chromosome { bits: c1, fitness: 0.0 },
        Chromosome { bits: c2, fitness: 0.0 },
    )
}

/// Flips each bit independently with probability `rate`.
fn mutate<R: Rng>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) {
    for bit in &mut chromosome.bits {
        if rng.random_range(0.0..1.0) < rate {
            *bit = !*bit;
        }
    }
}

fn evaluate_population(
    items: &[Item],
    capacity: f64,
    population: &mut [Chromosome],
    parallel: bool,
) {
    evaluate_slice(items, capacity, population, parallel);
}

fn evaluate_slice(items: &[Item], capacity: f64, slice: &mut [Chromosome], parallel: bool) {
    if parallel {
        slice.par_iter_mut().for_each(|c| {
            c.fitness = c.evaluate(items, capacity);
        });
    } else {
        for c in slice.iter_mut() {
            c.fitness = c.evaluate(items, capacity);
        }
    }
}

fn best_of(population: &[Chromosome]) -> &Chromosome {
    population
        .iter()
        .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
        .expect("population must not be empty")
}
