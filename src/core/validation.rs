use rust_decimal::Decimal;

use super::error::{SepaError, ValidationError};
use super::types::SepaDocument;

/// Maximum length of message, batch and payment identifiers.
pub const MAX_ID_LENGTH: usize = 35;

/// Maximum length of the initiating party and batch counterparty names.
pub const MAX_NAME_LENGTH: usize = 70;

/// Maximum length of a payment counterparty name.
pub const MAX_PAYMENT_NAME_LENGTH: usize = 35;

/// Fail when `value` is longer than `limit` characters.
pub fn check_length(value: &str, field: &str, limit: usize) -> Result<(), ValidationError> {
    if value.chars().count() > limit {
        return Err(ValidationError::new(field, limit, value));
    }
    Ok(())
}

/// Fail with [`SepaError::NegativeAmount`] when `amount` is below zero.
pub fn check_amount(amount: Decimal, field: &str) -> Result<(), SepaError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(SepaError::NegativeAmount {
            field: field.into(),
            value: amount.to_string(),
        });
    }
    Ok(())
}

/// Fail with [`SepaError::InvalidIban`] unless `value` is a well-formed IBAN.
pub fn check_iban(value: &str, field: &str) -> Result<(), SepaError> {
    if is_valid_iban(value) {
        Ok(())
    } else {
        Err(SepaError::InvalidIban {
            field: field.into(),
            value: value.into(),
        })
    }
}

/// Fail with [`SepaError::InvalidBic`] unless `value` is a well-formed BIC.
pub fn check_bic(value: &str, field: &str) -> Result<(), SepaError> {
    if is_valid_bic(value) {
        Ok(())
    } else {
        Err(SepaError::InvalidBic {
            field: field.into(),
            value: value.into(),
        })
    }
}

/// ISO 13616 IBAN check: country code, two check digits, alphanumeric BBAN,
/// and the ISO 7064 mod-97 remainder of 1. Spaces are ignored.
pub fn is_valid_iban(iban: &str) -> bool {
    let compact: Vec<u8> = iban
        .bytes()
        .filter(|b| *b != b' ')
        .map(|b| b.to_ascii_uppercase())
        .collect();

    if !(15..=34).contains(&compact.len()) {
        return false;
    }
    if !compact[..2].iter().all(u8::is_ascii_alphabetic)
        || !compact[2..4].iter().all(u8::is_ascii_digit)
        || !compact[4..].iter().all(u8::is_ascii_alphanumeric)
    {
        return false;
    }

    // Move country code and check digits to the end, letters count as 10..35.
    let mut remainder: u32 = 0;
    for &b in compact[4..].iter().chain(&compact[..4]) {
        remainder = if b.is_ascii_digit() {
            (remainder * 10 + u32::from(b - b'0')) % 97
        } else {
            (remainder * 100 + u32::from(b - b'A') + 10) % 97
        };
    }
    remainder == 1
}

/// ISO 9362 BIC check: 4-letter institution, 2-letter country,
/// 2 alphanumeric location, optional 3 alphanumeric branch.
pub fn is_valid_bic(bic: &str) -> bool {
    let b = bic.as_bytes();
    if b.len() != 8 && b.len() != 11 {
        return false;
    }
    b[..6].iter().all(u8::is_ascii_uppercase)
        && b[6..]
            .iter()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Run every check the build pipeline performs and return all violations,
/// not just the first.
///
/// Useful for reporting; [`crate::pain::build_document`] stops at the first.
pub fn validate_document(doc: &SepaDocument) -> Vec<SepaError> {
    let mut errors = Vec::new();
    let mut push_len = |value: &str, field: &str, limit: usize| {
        if let Err(e) = check_length(value, field, limit) {
            errors.push(SepaError::from(e));
        }
    };

    push_len(&doc.id, "sepaData.id", MAX_ID_LENGTH);
    push_len(
        &doc.initiator_name,
        "sepaData.initiatorName",
        MAX_NAME_LENGTH,
    );
    for (i, batch) in doc.positions.iter().enumerate() {
        push_len(&batch.id, &batch_field(i, "id"), MAX_ID_LENGTH);
        push_len(&batch.name, &batch_field(i, "name"), MAX_NAME_LENGTH);
        for (j, payment) in batch.payments.iter().enumerate() {
            push_len(&payment.id, &payment_field(i, j, "id"), MAX_ID_LENGTH);
            push_len(
                &payment.name,
                &payment_field(i, j, "name"),
                MAX_PAYMENT_NAME_LENGTH,
            );
        }
    }

    for (i, batch) in doc.positions.iter().enumerate() {
        for (j, payment) in batch.payments.iter().enumerate() {
            errors.extend(check_amount(payment.amount, &payment_field(i, j, "amount")).err());
        }
    }

    for (i, batch) in doc.positions.iter().enumerate() {
        errors.extend(check_accounts(doc, &batch.iban, &batch.bic, |f| batch_field(i, f)).err());
        for (j, payment) in batch.payments.iter().enumerate() {
            errors.extend(
                check_accounts(doc, &payment.iban, &payment.bic, |f| payment_field(i, j, f)).err(),
            );
        }
    }

    errors
}

/// IBAN/BIC checks for one account, honouring the document's check flags.
pub(crate) fn check_accounts(
    doc: &SepaDocument,
    iban: &str,
    bic: &str,
    path: impl Fn(&str) -> String,
) -> Result<(), SepaError> {
    if doc.check_iban {
        check_iban(iban, &path("iban"))?;
    }
    if doc.check_bic {
        check_bic(bic, &path("bic"))?;
    }
    Ok(())
}

/// Path of a batch-level field, e.g. `sepaData.positions[1].name`.
pub(crate) fn batch_field(batch: usize, field: &str) -> String {
    format!("sepaData.positions[{batch}].{field}")
}

/// Path of a payment-level field, e.g. `sepaData.positions[0].payments[3].id`.
pub(crate) fn payment_field(batch: usize, payment: usize, field: &str) -> String {
    format!("sepaData.positions[{batch}].payments[{payment}].{field}")
}
