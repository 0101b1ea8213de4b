use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AccountRow<'a> {
    pub customer: &'a str,
    pub balance: Decimal,
}

pub fn print_account<W>(output: &mut W, account: AccountRow<'_>) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    if let Err(err) = writer.serialize(account) {
        anyhow::bail!("Failed to write to CSV: {err}")
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::from_utf8;

    use super::*;

    #[test]
    fn prints_header_and_row() {
        let mut output = Vec::new();
        print_account(
            &mut output,
            AccountRow {
                customer: "Mr. Bryan Walton",
                balance: Decimal::new(744, 2),
            },
        )
        .unwrap();
        assert_eq!(
            from_utf8(&output).unwrap(),
            "customer,balance\nMr. Bryan Walton,7.44\n"
        );
    }
}
