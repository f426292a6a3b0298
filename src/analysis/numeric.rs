// src/analysis/numeric.rs
use super::chart::Bin;

pub fn mean(xs: &[f64]) -> Option<f64> {
    (!xs.is_empty()).then(|| xs.iter().sum::<f64>() / xs.len() as f64)
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Equal-width bins spanning min..=max. A single distinct value gets one
/// bin of width 1 centred on it.
pub fn histogram(xs: &[f64], bins: usize) -> Vec<Bin> {
    let xs: Vec<f64> = xs.iter().copied().filter(|x| x.is_finite()).collect();
    if xs.is_empty() || bins == 0 {
        return Vec::new();
    }
    let lo = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if hi - lo <= f64::EPSILON {
        return vec![Bin { lo: lo - 0.5, hi: lo + 0.5, count: xs.len() }];
    }

    let width = (hi - lo) / bins as f64;
    let mut out: Vec<Bin> = (0..bins)
        .map(|i| Bin { lo: lo + width * i as f64, hi: lo + width * (i + 1) as f64, count: 0 })
        .collect();
    for x in xs {
        // max lands in the last bin
        let i = (((x - lo) / width) as usize).min(bins - 1);
        out[i].count += 1;
    }
    out
}

/// Trailing mean over `window` values; the first `window - 1` slots are None.
pub fn rolling_mean(xs: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; xs.len()];
    }
    let mut out = Vec::with_capacity(xs.len());
    let mut sum = 0.0;
    for (i, x) in xs.iter().enumerate() {
        sum += x;
        if i >= window {
            sum -= xs[i - window];
        }
        out.push((i + 1 >= window).then(|| sum / window as f64));
    }
    out
}

/// Pearson correlation. None when fewer than two pairs or either side is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let mx = mean(&xs[..n])?;
    let my = mean(&ys[..n])?;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let (dx, dy) = (x - mx, y - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_every_value_once() {
        let xs: Vec<f64> = (0..=100).map(f64::from).collect();
        let h = histogram(&xs, 20);
        assert_eq!(h.len(), 20);
        assert_eq!(h.iter().map(|b| b.count).sum::<usize>(), 101);
        assert_eq!(h[0].lo, 0.0);
        assert_eq!(h[19].hi, 100.0);
        assert_eq!(h[19].count, 6);
    }

    #[test]
    fn histogram_edge_cases() {
        assert!(histogram(&[], 20).is_empty());
        let h = histogram(&[140.0, 140.0], 20);
        assert_eq!(h.len(), 1);
        assert_eq!(h[0].count, 2);
        assert_eq!(h[0].mid(), 140.0);
    }

    #[test]
    fn rolling_mean_is_trailing() {
        let r = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 2);
        assert_eq!(r, vec![None, Some(1.5), Some(2.5), Some(3.5)]);
        let r = rolling_mean(&[5.0], 1);
        assert_eq!(r, vec![Some(5.0)]);
    }

    #[test]
    fn pearson_signs_and_degenerate_input() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        assert!((pearson(&xs, &[2.0, 4.0, 6.0, 8.0]).unwrap() - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &[8.0, 6.0, 4.0, 2.0]).unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&xs, &[3.0, 3.0, 3.0, 3.0]), None);
        assert_eq!(pearson(&[1.0], &[1.0]), None);
    }

    #[test]
    fn mean_and_rounding() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0]), Some(1.5));
        assert_eq!(round2(145.456), 145.46);
    }
}
