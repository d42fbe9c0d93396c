// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 steps inside a domain) and tick label formatting.

/// Default number of ticks requested per axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Step between ticks for roughly `count` ticks over [start, stop], snapped to
/// 1, 2 or 5 times a power of ten. Returns 0.0 for empty or non-finite spans.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    // Halved so spans wider than f64::MAX still yield a finite step.
    let half_span = (stop * 0.5 - start * 0.5).abs();
    if count == 0 || !half_span.is_finite() || half_span == 0.0 {
        return 0.0;
    }
    let raw = half_span / count as f64 * 2.0;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Tick values inside [min, max] (inclusive), ascending.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = tick_step(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return if lo.is_finite() { vec![lo] } else { Vec::new() };
    }
    // Work in integer multiples so ticks land exactly on k * step; for
    // sub-unit steps divide by the inverse to avoid 0.1 * 3 = 0.30000000000000004.
    let inverse = (step.log10().floor() < 0.0).then(|| (1.0 / step).round());
    let (i0, i1) = match inverse {
        Some(inv) => ((lo * inv).ceil(), (hi * inv).floor()),
        None => ((lo / step).ceil(), (hi / step).floor()),
    };
    if i1 < i0 || i1 - i0 > 10_000.0 {
        return Vec::new();
    }
    let n = (i1 - i0) as usize;
    (0..=n)
        .map(|k| {
            let i = i0 + k as f64;
            match inverse {
                Some(inv) => i / inv,
                None => i * step,
            }
        })
        .filter(|v| v.is_finite())
        .collect()
}

/// Number of decimals needed to distinguish ticks spaced `step` apart.
pub fn tick_precision(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 2;
    }
    let p = -step.log10().floor();
    if p > 0.0 { p as usize } else { 0 }
}

/// Formats a tick label with `precision` decimals, never printing "-0".
pub fn format_tick(value: f64, precision: usize) -> String {
    let s = format!("{:.*}", precision, value);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
