use serde::Serialize;

/// Stagger of each dot in the typing animation.
pub const DOT_DELAYS_MS: [u32; 3] = [0, 150, 300];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub delay_ms: u32,
}

/// Shown while a reply is pending; the caller decides when to show it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PresenceIndicator {
    pub dots: Vec<Dot>,
}

pub fn indicator() -> PresenceIndicator {
    PresenceIndicator {
        dots: DOT_DELAYS_MS
            .iter()
            .map(|&delay_ms| Dot { delay_ms })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_staggered_dots() {
        let delays: Vec<u32> = indicator().dots.iter().map(|d| d.delay_ms).collect();
        assert_eq!(delays, vec![0, 150, 300]);
        assert_eq!(indicator(), indicator());
    }
}
