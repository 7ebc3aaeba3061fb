//! Generic record engine
//!
//! Pure operations over an in-memory ordered collection of [`Identified`]
//! records. Nothing here touches a backend; callers persist afterwards.
//!
//! Order is significant everywhere: `create` appends, `delete` closes the
//! gap without reordering, `update` replaces in place.

use installit_core::{Error, Identified, Result, ID_BYTES, MAX_ID_ATTEMPTS};
use rand::RngCore;

/// Draw random hex IDs until one is not taken.
///
/// Fails with [`Error::IdSpaceExhausted`] after [`MAX_ID_ATTEMPTS`] draws,
/// which only happens if `is_taken` rejects nearly every token.
pub fn generate_unique_id(is_taken: impl Fn(&str) -> bool) -> Result<String> {
    let mut rng = rand::thread_rng();
    let mut bytes = [0u8; ID_BYTES];

    for _ in 0..MAX_ID_ATTEMPTS {
        if rng.try_fill_bytes(&mut bytes).is_err() {
            continue;
        }
        let id = hex::encode(bytes);
        if !is_taken(&id) {
            return Ok(id);
        }
    }

    Err(Error::IdSpaceExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}

/// Generate an ID not used by any record in `records`
pub fn generate_id<T: Identified>(records: &[T]) -> Result<String> {
    generate_unique_id(|id| records.iter().any(|r| r.id() == id))
}

/// Position of the record with `id`
pub fn index_of<T: Identified>(id: &str, records: &[T]) -> Result<usize> {
    records
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| Error::not_found(T::KIND, id))
}

/// The record with `id`
pub fn get<'a, T: Identified>(id: &str, records: &'a [T]) -> Result<&'a T> {
    index_of(id, records).map(|index| &records[index])
}

/// Assign a fresh ID to `record` (overwriting any existing one), append it,
/// and return the ID.
pub fn create<T: Identified>(record: T, records: &mut Vec<T>) -> Result<String> {
    create_avoiding(record, records, |_| false)
}

/// Like [`create`], but the fresh ID must also satisfy `!also_taken(id)`.
///
/// For collections whose IDs share a namespace with IDs kept elsewhere,
/// such as drivers nested inside driver groups.
pub fn create_avoiding<T: Identified>(
    mut record: T,
    records: &mut Vec<T>,
    also_taken: impl Fn(&str) -> bool,
) -> Result<String> {
    let id = generate_unique_id(|id| also_taken(id) || records.iter().any(|r| r.id() == id))?;
    record.set_id(id.clone());
    records.push(record);
    Ok(id)
}

/// Replace the record whose ID matches `record`'s, keeping its position.
///
/// Full replacement, not a field merge.
pub fn update<T: Identified>(record: T, records: &mut [T]) -> Result<()> {
    let index = index_of(record.id(), records)?;
    records[index] = record;
    Ok(())
}

/// Remove and return the record with `id`.
///
/// On failure `records` is left untouched.
pub fn delete<T: Identified>(id: &str, records: &mut Vec<T>) -> Result<T> {
    let index = index_of(id, records)?;
    Ok(records.remove(index))
}

/// Move the record with `id` so it sits immediately behind position `target`
/// of the collection with that record taken out.
///
/// `target` must lie in `[-1, len - 2]`. Returns `Ok(false)` for the no-op
/// cases: a single-element collection, `target == -1`, or a record already
/// directly behind `target`. Records outside the moved span keep their
/// relative order.
///
/// ```text
/// [A, B, C]  move A behind 1  ->  [B, C, A]
/// [A, B, C]  move C behind 0  ->  [A, C, B]
/// ```
pub fn move_behind<T: Identified>(id: &str, target: isize, records: &mut [T]) -> Result<bool> {
    let src = index_of(id, records)?;
    let len = records.len();

    if len == 1 {
        return Ok(false);
    }

    if target < -1 || target > len as isize - 2 {
        return Err(Error::OutOfBounds { index: target, len });
    }

    if target == -1 || src as isize - target == 1 {
        return Ok(false);
    }

    let target = target as usize;
    if src <= target {
        // Adjacent swaps (i, i+1) for i in src..=target
        records[src..=target + 1].rotate_left(1);
    } else {
        // Adjacent swaps (i-1, i) for i in (target+2..=src).rev()
        records[target + 1..=src].rotate_right(1);
    }
    Ok(true)
}
