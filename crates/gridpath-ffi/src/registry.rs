//! Generational handle table.
//!
//! Hosts hold engine objects through opaque numbers. A [`Handle`] pairs a
//! slot index with the slot's generation, so a handle to a destroyed object
//! never resolves, even after its slot has been reused.

/// Bits of generation carried in an encoded handle (32 + 21 = 53, the
/// width of an `f64` mantissa).
const GEN_BITS: u32 = 21;
const GEN_MASK: u32 = (1 << GEN_BITS) - 1;
const LOW_MASK: u64 = 0xFFFF_FFFF;

/// Largest value [`Handle::to_f64`] can produce.
const MAX_ENCODED: f64 = (((GEN_MASK as u64) << 32) | LOW_MASK) as f64;

/// The encoded value that never names an object.
pub const NULL_HANDLE: f64 = 0.0;

/// Reference to a slot in a [`HandleTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    /// Encode as a positive integral `f64` below 2^53. Never
    /// [`NULL_HANDLE`].
    pub fn to_f64(self) -> f64 {
        let raw = ((u64::from(self.generation & GEN_MASK)) << 32) | (u64::from(self.index) + 1);
        raw as f64
    }

    /// Decode a value produced by [`to_f64`](Self::to_f64). Anything else
    /// (zero, negative, fractional, non-finite or too large) is `None`.
    pub fn from_f64(v: f64) -> Option<Self> {
        if !v.is_finite() || v < 1.0 || v > MAX_ENCODED || v.fract() != 0.0 {
            return None;
        }
        let raw = v as u64;
        let low = raw & LOW_MASK;
        if low == 0 {
            return None;
        }
        Some(Self {
            index: (low - 1) as u32,
            generation: (raw >> 32) as u32,
        })
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Slot storage addressed by [`Handle`]s.
#[derive(Debug)]
pub struct HandleTable<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HandleTable<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live objects.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store `value` and return its handle.
    pub fn insert(&mut self, value: T) -> Handle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return Handle {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        Handle {
            index,
            generation: 0,
        }
    }

    pub fn get(&self, h: Handle) -> Option<&T> {
        self.slots
            .get(h.index as usize)
            .filter(|s| s.generation == h.generation)
            .and_then(|s| s.value.as_ref())
    }

    pub fn get_mut(&mut self, h: Handle) -> Option<&mut T> {
        self.slots
            .get_mut(h.index as usize)
            .filter(|s| s.generation == h.generation)
            .and_then(|s| s.value.as_mut())
    }

    /// Whether `h` names a live object.
    pub fn contains(&self, h: Handle) -> bool {
        self.get(h).is_some()
    }

    /// Remove and return the object named by `h`. Removing a stale handle
    /// returns `None` and changes nothing.
    pub fn remove(&mut self, h: Handle) -> Option<T> {
        let slot = self.slots.get_mut(h.index as usize)?;
        if slot.generation != h.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = (slot.generation + 1) & GEN_MASK;
        self.free.push(h.index);
        self.len -= 1;
        Some(value)
    }

    /// Resolve an encoded handle.
    pub fn resolve(&self, v: f64) -> Option<&T> {
        Handle::from_f64(v).and_then(|h| self.get(h))
    }

    /// Resolve an encoded handle for mutation.
    pub fn resolve_mut(&mut self, v: f64) -> Option<&mut T> {
        Handle::from_f64(v).and_then(|h| self.get_mut(h))
    }
}
