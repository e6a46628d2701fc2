use std::sync::atomic::{AtomicI64, Ordering};
use rand::Rng;

const ID_PREFIX: &str = "DON";
const TOKEN_PREFIX: &str = "0x";
const FRAGMENT_DIGITS: usize = 13;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Identifiers handed to the confirmation view. Nothing keeps a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationReceipt {
    pub donation_id: String,
    /// Looks like a hex digest; carries no integrity guarantee.
    pub verification_token: String,
}

impl DonationReceipt {
    pub fn confirmation_url(&self) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("id", &self.donation_id)
            .append_pair("hash", &self.verification_token)
            .finish();
        format!("/donate/confirmation?{}", query)
    }
}

/// Mints receipts. Millisecond stamps are strictly increasing per minter, so
/// two submissions landing in the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct ReceiptMinter {
    last_millis: AtomicI64,
}

impl ReceiptMinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&self) -> DonationReceipt {
        let millis = self.next_millis(chrono::Utc::now().timestamp_millis());
        let mut rng = rand::thread_rng();
        DonationReceipt {
            donation_id: format!("{}{}", ID_PREFIX, millis),
            verification_token: format!(
                "{}{}{}",
                TOKEN_PREFIX,
                encode_fraction(rng.gen::<f64>(), FRAGMENT_DIGITS),
                encode_fraction(rng.gen::<f64>(), FRAGMENT_DIGITS),
            ),
        }
    }

    fn next_millis(&self, now: i64) -> i64 {
        let prev = self
            .last_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| Some(now.max(prev + 1)))
            .unwrap_or_else(|prev| prev);
        now.max(prev + 1)
    }
}

/// Base-36 digits of a fraction in `[0, 1)`, at most `max_digits` of them.
fn encode_fraction(mut value: f64, max_digits: usize) -> String {
    let mut out = String::with_capacity(max_digits);
    while value > 0.0 && out.len() < max_digits {
        value *= 36.0;
        let digit = value.floor();
        out.push(BASE36[digit as usize] as char);
        value -= digit;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donation_id_is_prefix_and_digits() {
        let receipt = ReceiptMinter::new().mint();
        let digits = receipt.donation_id.strip_prefix("DON").expect("DON prefix");
        assert!(!digits.is_empty());
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn token_is_prefixed_base36() {
        let receipt = ReceiptMinter::new().mint();
        let body = receipt.verification_token.strip_prefix("0x").expect("0x prefix");
        assert!(body.len() <= 2 * FRAGMENT_DIGITS);
        assert!(body.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn ids_strictly_increase_within_a_millisecond() {
        let minter = ReceiptMinter::new();
        assert_eq!(minter.next_millis(1000), 1000);
        assert_eq!(minter.next_millis(1000), 1001);
        assert_eq!(minter.next_millis(999), 1002);
        assert_eq!(minter.next_millis(5000), 5000);
    }

    #[test]
    fn consecutive_receipts_differ() {
        let minter = ReceiptMinter::new();
        let a = minter.mint();
        let b = minter.mint();
        assert_ne!(a.donation_id, b.donation_id);
    }

    #[test]
    fn fraction_encoding() {
        assert_eq!(encode_fraction(0.5, 13), "i");
        assert_eq!(encode_fraction(0.25, 13), "9");
        assert_eq!(encode_fraction(0.75, 13), "r");
        assert_eq!(encode_fraction(0.0, 13), "");
        assert_eq!(encode_fraction(0.123_456_789, 13).len(), 13);
    }

    #[test]
    fn confirmation_url_carries_both_values() {
        let receipt = DonationReceipt {
            donation_id: "DON42".to_string(),
            verification_token: "0xabc".to_string(),
        };
        assert_eq!(receipt.confirmation_url(), "/donate/confirmation?id=DON42&hash=0xabc");
    }
}
