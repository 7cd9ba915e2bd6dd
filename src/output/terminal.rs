//! Terminal output for subnet listings.

use crate::models::Subnet;

/// Format a value as a quoted, right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print the subnet listing as quoted columns, one row per subnet, in
/// the order the controller returned them.
pub fn print_subnets(subnets: &[Subnet]) {
    log::info!("#Start print_subnets()");
    log::info!("# Got subnet count = {}", subnets.len());

    println!(r#""cnt","name","subnet""#);
    for (i, s) in subnets.iter().enumerate() {
        println!(
            "{cnt},{name},{cidr}",
            cnt = format_field(i + 1, 5),
            name = format_field(&s.name, 18),
            cidr = format_field(&s.cidr, 20),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("10.255.255.0/28", 5), "\"10.255.255.0/28\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }
}
