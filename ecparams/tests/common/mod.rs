//! Fault-injecting math backend shared by the integration tests.

#![allow(dead_code)]

use core::{cell::Cell, fmt};
use ecparams::{BigUint, Error, MathBackend, NumBigint, Result};
use std::rc::Rc;

/// Backend operation that can be made to fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Op {
    Init,
    Copy,
    SetSmall,
}

/// Big integer that keeps count of how many of its siblings are alive.
pub struct Tracked {
    pub value: BigUint,
    live: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.value)
    }
}

/// [`NumBigint`] wrapper which fails the `n`-th call (zero-based) of one
/// operation and counts live integers.
#[derive(Default)]
pub struct FaultyMath {
    fail: Option<(Op, usize)>,
    live: Rc<Cell<usize>>,
    inits: Cell<usize>,
    copies: Cell<usize>,
    sets: Cell<usize>,
}

impl FaultyMath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(op: Op, nth: usize) -> Self {
        Self {
            fail: Some((op, nth)),
            ..Self::default()
        }
    }

    /// Number of integers allocated through this backend and not yet
    /// dropped.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Number of successful and failed calls made for `op`.
    pub fn calls(&self, op: Op) -> usize {
        self.counter(op).get()
    }

    /// Allocate a caller-owned integer with the given value.
    pub fn int(&self, value: impl Into<BigUint>) -> Tracked {
        self.live.set(self.live.get() + 1);
        Tracked {
            value: value.into(),
            live: Rc::clone(&self.live),
        }
    }

    fn counter(&self, op: Op) -> &Cell<usize> {
        match op {
            Op::Init => &self.inits,
            Op::Copy => &self.copies,
            Op::SetSmall => &self.sets,
        }
    }

    /// Record a call of `op`, returning whether it must fail.
    fn tick(&self, op: Op) -> bool {
        let counter = self.counter(op);
        let n = counter.get();
        counter.set(n + 1);
        self.fail == Some((op, n))
    }
}

impl MathBackend for FaultyMath {
    type Int = Tracked;

    fn init(&self) -> Result<Tracked> {
        if self.tick(Op::Init) {
            return Err(Error::AllocationFailure);
        }

        Ok(self.int(0u8))
    }

    fn copy(&self, src: &Tracked, dst: &mut Tracked) -> Result<()> {
        if self.tick(Op::Copy) {
            return Err(Error::CopyFailure);
        }

        dst.value.clone_from(&src.value);
        Ok(())
    }

    fn set_small(&self, dst: &mut Tracked, value: u64) -> Result<()> {
        if self.tick(Op::SetSmall) {
            return Err(Error::CopyFailure);
        }

        dst.value = BigUint::from(value);
        Ok(())
    }

    fn read_radix(&self, dst: &mut Tracked, digits: &str, radix: u32) -> Result<()> {
        NumBigint.read_radix(&mut dst.value, digits, radix)
    }

    fn unsigned_bin_size(&self, value: &Tracked) -> usize {
        NumBigint.unsigned_bin_size(&value.value)
    }
}
