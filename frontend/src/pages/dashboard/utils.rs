use super::repository::{ChartPoint, LeaveShare};

/// Bar height as a share of the tallest bar, in percent.
pub fn bar_height_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

pub fn max_value(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(0.0, f64::max)
}

/// SVG `points` attribute for a polyline spanning a `width` x `height` box,
/// with the y axis starting at zero.
pub fn polyline_points(points: &[ChartPoint], width: f64, height: f64) -> String {
    let max = max_value(points);
    let step = if points.len() > 1 {
        width / (points.len() - 1) as f64
    } else {
        0.0
    };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = step * i as f64;
            let y = height - bar_height_percent(p.value, max) / 100.0 * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// CSS `conic-gradient` drawing the leave type distribution as a pie.
pub fn conic_gradient(shares: &[LeaveShare]) -> String {
    let mut start = 0.0;
    let stops = shares
        .iter()
        .map(|share| {
            let end = start + share.percent;
            let stop = format!("{} {start}% {end}%", share.color);
            start = end;
            stop
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("conic-gradient({stops})")
}

pub fn share_label(share: &LeaveShare) -> String {
    format!("{} {}%", share.label, share.percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64) -> ChartPoint {
        ChartPoint {
            label: label.into(),
            value,
        }
    }

    #[test]
    fn bar_heights_are_relative_to_the_maximum() {
        assert_eq!(bar_height_percent(89.0, 89.0), 100.0);
        assert_eq!(bar_height_percent(44.5, 89.0), 50.0);
        assert_eq!(bar_height_percent(5.0, 0.0), 0.0);
    }

    #[test]
    fn polyline_spans_the_box() {
        let points = vec![point("Jan", 50.0), point("Feb", 100.0), point("Mar", 0.0)];
        assert_eq!(
            polyline_points(&points, 200.0, 100.0),
            "0.0,50.0 100.0,0.0 200.0,100.0"
        );
        assert_eq!(polyline_points(&[], 200.0, 100.0), "");
    }

    #[test]
    fn gradient_stops_accumulate() {
        let shares = vec![
            LeaveShare {
                label: "Annual Leave".into(),
                percent: 50.0,
                color: "#3B82F6".into(),
            },
            LeaveShare {
                label: "Sick Leave".into(),
                percent: 27.0,
                color: "#10B981".into(),
            },
        ];
        assert_eq!(
            conic_gradient(&shares),
            "conic-gradient(#3B82F6 0% 50%, #10B981 50% 77%)"
        );
        assert_eq!(share_label(&shares[1]), "Sick Leave 27%");
    }
}
