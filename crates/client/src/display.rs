//! Presentation of the memory counters

use cardmem_core::MemoryInfo;

/// Render a byte count with its kilobyte value
///
/// The kilobyte figure is the raw count integer-divided by 1024, matching
/// what operators expect from the card tooling: `2048` renders as
/// `2048B (2 kB)`, `1000` as `1000B (0 kB)`.
pub fn format_quantity(bytes: u16) -> String {
    format!("{}B ({} kB)", bytes, bytes / 1024)
}

/// Three-line report in the fixed reporting order
pub fn report(info: &MemoryInfo) -> String {
    format!(
        "Available persistent memory:         {}\n\
         Available transient reset memory:    {}\n\
         Available transient deselect memory: {}",
        format_quantity(info.persistent),
        format_quantity(info.transient_reset),
        format_quantity(info.transient_deselect),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2048), "2048B (2 kB)");
        assert_eq!(format_quantity(1000), "1000B (0 kB)");
        assert_eq!(format_quantity(0), "0B (0 kB)");
        assert_eq!(format_quantity(u16::MAX), "65535B (63 kB)");
    }

    #[test]
    fn test_report_order() {
        let info = MemoryInfo {
            persistent: 1000,
            transient_reset: 200,
            transient_deselect: 50,
        };
        let report = report(&info);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Available persistent memory:"));
        assert!(lines[0].ends_with("1000B (0 kB)"));
        assert!(lines[1].starts_with("Available transient reset memory:"));
        assert!(lines[1].ends_with("200B (0 kB)"));
        assert!(lines[2].starts_with("Available transient deselect memory:"));
        assert!(lines[2].ends_with("50B (0 kB)"));
    }
}
