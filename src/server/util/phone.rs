use rand::Rng;

/// Generates a cosmetic `DDD-DDD-DDDD` phone number for guests created on the fly.
///
/// The first two groups range over 100-999 and the last over 0000-9999. No uniqueness
/// or dialability is implied.
pub fn generate_placeholder_phone() -> String {
    let mut rng = rand::rng();

    let area_code = rng.random_range(100..1000);
    let prefix = rng.random_range(100..1000);
    let line_number = rng.random_range(0..10000);

    format!("{}-{}-{:04}", area_code, prefix, line_number)
}
