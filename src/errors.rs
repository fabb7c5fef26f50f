use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(
    NonPositiveAmount,
    "Transaction amounts must be positive (got {value}).",
    { value: f64 }
);
define_client_error!(
    UnknownTransactionType,
    "Unknown transaction type: '{value}'. Expected 'income' or 'expense'.",
    { value: &str }
);

// Dues-related.
define_client_error!(
    InvalidMonthIndex,
    "Invalid month index: {index}. Expected a value between 0 (January) and 11 (December).",
    { index: usize }
);
define_client_error!(
    InvalidDuesRate,
    "Invalid annual dues rate for '{role}': {value}. Rates must be finite and non-negative.",
    { role: &str, value: f64 }
);

// Persistence-related.
define_client_error!(MemberNotFound, "Member not found: '{id}'.", { id: &str });
define_client_error!(TransactionNotFound, "Transaction not found: '{id}'.", { id: &str });

// Messaging-related.
define_internal_error!(
    MessagingHandoffFailed,
    "Could not hand off reminder for '{member}' to the messaging client.",
    { member: &str }
);
