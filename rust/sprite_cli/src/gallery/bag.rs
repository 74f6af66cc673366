// rust/sprite_cli/src/gallery/bag.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use block_sprites::{Kind, Orientation, SHAPE_COUNT};

/// Seeded 7-bag piece stream: every run of 7 draws holds each shape once.
#[derive(Clone)]
pub struct BagStream {
    rng: StdRng,
    bag: [Kind; SHAPE_COUNT],
    bag_idx: usize,
}

impl BagStream {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            bag: [
                Kind::I,
                Kind::O,
                Kind::T,
                Kind::S,
                Kind::Z,
                Kind::J,
                Kind::L,
            ],
            bag_idx: SHAPE_COUNT, // force refill on first draw
        }
    }

    fn refill(&mut self) {
        self.bag.copy_from_slice(Kind::all());
        self.bag.shuffle(&mut self.rng);
        self.bag_idx = 0;
    }

    pub fn draw(&mut self) -> Kind {
        if self.bag_idx >= SHAPE_COUNT {
            self.refill();
        }
        let k = self.bag[self.bag_idx];
        self.bag_idx += 1;
        k
    }

    /// Orientation from the same stream, so a seed fixes the whole gallery.
    pub fn draw_orientation(&mut self) -> Orientation {
        let all = Orientation::all();
        all[self.rng.gen_range(0..all.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_full_bag(kinds: &[Kind]) {
        let mut seen = [false; SHAPE_COUNT];
        for &k in kinds {
            assert!(!seen[k.index()], "{k} drawn twice in {kinds:?}");
            seen[k.index()] = true;
        }
        assert!(seen.into_iter().all(|v| v));
    }

    #[test]
    fn each_bag_holds_every_kind_exactly_once() {
        let mut stream = BagStream::new(9001);
        let draws: Vec<Kind> = (0..4 * SHAPE_COUNT).map(|_| stream.draw()).collect();
        for bag in draws.chunks(SHAPE_COUNT) {
            assert_full_bag(bag);
        }
    }

    #[test]
    fn orientation_draws_do_not_break_the_bag() {
        // The gallery interleaves both draws on one rng.
        let mut stream = BagStream::new(3);
        let mut kinds = Vec::with_capacity(3 * SHAPE_COUNT);
        for _ in 0..3 * SHAPE_COUNT {
            kinds.push(stream.draw());
            let _ = stream.draw_orientation();
        }
        for bag in kinds.chunks(SHAPE_COUNT) {
            assert_full_bag(bag);
        }
    }

    #[test]
    fn same_seed_gives_the_same_stream() {
        let mut a = BagStream::new(42);
        let mut b = BagStream::new(42);
        for _ in 0..3 * SHAPE_COUNT {
            assert_eq!(a.draw(), b.draw());
            assert_eq!(a.draw_orientation(), b.draw_orientation());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let draw = |seed| {
            let mut s = BagStream::new(seed);
            (0..3 * SHAPE_COUNT)
                .map(|_| (s.draw(), s.draw_orientation()))
                .collect::<Vec<_>>()
        };
        assert_ne!(draw(1), draw(2));
    }
}
