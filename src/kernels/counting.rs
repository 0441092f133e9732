//! Counting sort for byte buffers.
//!
//! With 256 possible values a histogram plus a fill pass beats every
//! comparison kernel at any size, needs no extra allocation, and is trivially
//! stable for a plain value type.

pub fn counting_sort_bytes(data: &mut [u8]) {
    if data.len() <= 1 {
        return;
    }

    let mut counts = [0usize; 256];
    for &byte in data.iter() {
        counts[byte as usize] += 1;
    }

    let mut out = 0;
    for (value, &count) in counts.iter().enumerate() {
        data[out..out + count].fill(value as u8);
        out += count;
    }
}
