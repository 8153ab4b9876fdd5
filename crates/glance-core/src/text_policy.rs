//! Allocation-free status labels.

use core::str;

pub const PROGRESS_LABEL_LEN: usize = 8;
pub const WPM_LABEL_LEN: usize = 10;
pub const FONT_LABEL_LEN: usize = 8;

/// Reading progress in hundredths of a percent, `position / max(len, 1)`.
pub fn progress_basis_points(position: usize, len: usize) -> u32 {
    if len == 0 {
        return 0;
    }

    let position = position.min(len) as u64;
    (position * 10_000 / len as u64) as u32
}

/// Formats progress as `"12.34%"`.
pub fn progress_label(position: usize, len: usize, out: &mut [u8; PROGRESS_LABEL_LEN]) -> &str {
    let basis_points = progress_basis_points(position, len);
    let mut written = write_u32_ascii(basis_points / 100, out);

    let fraction = basis_points % 100;
    let tail = [
        b'.',
        b'0' + (fraction / 10) as u8,
        b'0' + (fraction % 10) as u8,
        b'%',
    ];
    for byte in tail {
        if written >= out.len() {
            break;
        }
        out[written] = byte;
        written += 1;
    }

    str::from_utf8(&out[..written]).unwrap_or("0.00%")
}

pub fn wpm_label(wpm: u16, out: &mut [u8; WPM_LABEL_LEN]) -> &str {
    let len = write_u32_ascii(wpm as u32, out);
    let len = append(out, len, b" wpm");
    str::from_utf8(&out[..len]).unwrap_or("? wpm")
}

pub fn font_label(font_size: u16, out: &mut [u8; FONT_LABEL_LEN]) -> &str {
    let len = write_u32_ascii(font_size as u32, out);
    let len = append(out, len, b"pt");
    str::from_utf8(&out[..len]).unwrap_or("?pt")
}

pub fn write_u32_ascii(mut value: u32, out: &mut [u8]) -> usize {
    if out.is_empty() {
        return 0;
    }

    if value == 0 {
        out[0] = b'0';
        return 1;
    }

    let mut tmp = [0u8; 10];
    let mut n = 0usize;
    while value > 0 && n < tmp.len() {
        tmp[n] = b'0' + (value % 10) as u8;
        value /= 10;
        n += 1;
    }

    let len = n.min(out.len());
    for i in 0..len {
        out[i] = tmp[n - 1 - i];
    }
    len
}

fn append(out: &mut [u8], len: usize, suffix: &[u8]) -> usize {
    let take = suffix.len().min(out.len().saturating_sub(len));
    out[len..len + take].copy_from_slice(&suffix[..take]);
    len + take
}
