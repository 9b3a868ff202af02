// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![feature(test)]

extern crate test;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rbset::Set;
use test::{Bencher, black_box};

macro_rules! set_insert_remove_rand_bench {
    ($name: ident, $n: expr) => (
        #[bench]
        pub fn $name(b: &mut Bencher) {
            let n: usize = $n;
            let mut set = Set::new();
            // setup
            let mut rng = StdRng::seed_from_u64(0);

            for _ in 0..n {
                set.insert(rng.gen::<usize>() % n);
            }

            // measure
            b.iter(|| {
                let k = rng.gen::<usize>() % n;
                set.insert(k);
                set.remove(&k);
            });
            black_box(set);
        }
    )
}

macro_rules! set_insert_remove_seq_bench {
    ($name: ident, $n: expr) => (
        #[bench]
        pub fn $name(b: &mut Bencher) {
            let mut set = Set::new();
            let n: usize = $n;
            // setup
            for i in 0..n {
                set.insert(i * 2);
            }

            // measure
            let mut i = 1;
            b.iter(|| {
                set.insert(i);
                set.remove(&i);
                i = (i + 2) % n;
            });
            black_box(set);
        }
    )
}

macro_rules! set_find_rand_bench {
    ($name: ident, $n: expr) => (
        #[bench]
        pub fn $name(b: &mut Bencher) {
            let mut set = Set::new();
            let n: usize = $n;

            // setup
            let mut rng = StdRng::seed_from_u64(0);
            let mut keys: Vec<_> = (0..n).map(|_| rng.gen::<usize>() % n).collect();

            for &k in &keys {
                set.insert(k);
            }

            keys.shuffle(&mut rng);

            // measure
            let mut i = 0;
            b.iter(|| {
                let t = set.find(&keys[i]).get();
                i = (i + 1) % n;
                black_box(t);
            })
        }
    )
}

macro_rules! set_iter_bench {
    ($name: ident, $n: expr) => (
        #[bench]
        pub fn $name(b: &mut Bencher) {
            let mut set = Set::<u32>::new();
            let n: usize = $n;
            let mut rng = StdRng::seed_from_u64(0);

            for _ in 0..n {
                set.insert(rng.gen());
            }

            b.iter(|| {
                for item in set.iter() {
                    black_box(item);
                }
            });
        }
    )
}

macro_rules! set_cursor_bench {
    ($name: ident, $n: expr) => (
        #[bench]
        pub fn $name(b: &mut Bencher) {
            let set: Set<usize> = (0..$n).collect();

            b.iter(|| {
                let mut cursor = set.end();
                cursor.move_prev();
                while let Some(item) = cursor.get() {
                    black_box(item);
                    cursor.move_prev();
                }
            });
        }
    )
}

set_insert_remove_rand_bench!{insert_remove_rand_100,    100}
set_insert_remove_rand_bench!{insert_remove_rand_10_000, 10_000}

set_insert_remove_seq_bench!{insert_remove_seq_100,    100}
set_insert_remove_seq_bench!{insert_remove_seq_10_000, 10_000}

set_find_rand_bench!{find_rand_100,    100}
set_find_rand_bench!{find_rand_10_000, 10_000}

set_iter_bench!{iter_100,     100}
set_iter_bench!{iter_1000,    1000}
set_iter_bench!{iter_100_000, 100_000}

set_cursor_bench!{cursor_rev_1000,    1000}
set_cursor_bench!{cursor_rev_100_000, 100_000}
