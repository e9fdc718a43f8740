/// Format a byte count for plugin output: binary units, dividing while the
/// value stays above 512, no decimal once the number is big enough that one
/// would not add information.
///
/// `fmt_bytes(1.5 GiB)` → `"1.5 GiB"`, `fmt_bytes(10 GiB)` → `"10 GiB"`.
pub fn fmt_bytes(bytes: f64) -> String {
    const UNITS: &[&str] = &["TiB", "GiB", "MiB", "KiB", "B"];
    let mut v = bytes;
    let mut i = UNITS.len() - 1;
    while v > 512.0 && i > 0 {
        v /= 1024.0;
        i -= 1;
    }
    if v > 9.0 || v.fract() < 0.1 {
        format!("{} {}", v.trunc() as u64, UNITS[i])
    } else {
        format!("{:.1} {}", v, UNITS[i])
    }
}
