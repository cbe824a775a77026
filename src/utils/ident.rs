use rand::RngCore;
use rand::rngs::OsRng;

/// Generates a random 128-bit identifier in the canonical hyphenated form,
/// suitable as a collision-resistant object key.
///
/// The 16 bytes come from the operating system's secure random source; the
/// variant and version-4 marker bits are then set per RFC 4122, so the output
/// reads as a standard random UUID. The random source is the only failure
/// mode.
pub fn generate() -> Result<String, rand::Error> {
    let mut bytes = [0u8; 16];
    OsRng.try_fill_bytes(&mut bytes)?;

    // variant bits; see RFC 4122 section 4.1.1
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    // version 4 (pseudo-random); see section 4.1.3
    bytes[6] = (bytes[6] & 0x0f) | 0x40;

    let hex = hex::encode(bytes);
    Ok(format!(
        "{}-{}-{}-{}-{}",
        &hex[..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..]
    ))
}
