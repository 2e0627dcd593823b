use chrono::Utc;

use crate::models::mortgage::MortgageCalculation;

pub const PDF_FILE_NAME: &str = "mortgage-calculation.pdf";

// A4 in points
const PAGE_WIDTH: u32 = 595;
const PAGE_HEIGHT: u32 = 842;
const LEFT_MARGIN: u32 = 28;

/// Renders the calculation as a one page PDF: a heading followed by the
/// payment, total and loan amount lines.
pub fn render_pdf(calculation: &MortgageCalculation) -> Vec<u8> {
    let lines = [
        (16, 42, "Mortgage Calculation".to_string()),
        (12, 85, calculation.payment_line()),
        (12, 113, calculation.total_line()),
        (12, 142, calculation.loan_line()),
    ];

    let mut content = String::new();
    for (size, top, text) in lines.iter() {
        content.push_str(&format!(
            "BT /F1 {} Tf {} {} Td ({}) Tj ET\n",
            size,
            LEFT_MARGIN,
            PAGE_HEIGHT - top,
            escape_text(text)
        ));
    }

    let created = Utc::now().format("D:%Y%m%d%H%M%SZ");
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}endstream",
            content.len(),
            content
        ),
        format!("<< /Title (Mortgage Calculation) /CreationDate ({created}) >>"),
    ];

    let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());

    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
    }

    let xref_start = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        xref.push_str(&format!("{offset:010} 00000 n \n"));
    }
    out.extend_from_slice(xref.as_bytes());
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            objects.len(),
            xref_start
        )
        .as_bytes(),
    );

    out
}

fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mortgage::PaymentFrequency;

    fn calculation() -> MortgageCalculation {
        MortgageCalculation {
            payment: 1786.397953,
            total: 1161158.670011,
            loan_amount: 400000.0,
            frequency: PaymentFrequency::BiWeekly,
        }
    }

    #[test]
    fn writes_the_three_result_lines() {
        let pdf = String::from_utf8(render_pdf(&calculation())).unwrap();

        assert!(pdf.starts_with("%PDF-1.4"));
        assert!(pdf.ends_with("%%EOF\n"));
        assert!(pdf.contains("(Mortgage Calculation) Tj"));
        assert!(pdf.contains("(Payment: $1786.40 \\(Bi-Weekly\\)) Tj"));
        assert!(pdf.contains("(Total Payment: $1161158.67) Tj"));
        assert!(pdf.contains("(Loan Amount: $400000.00) Tj"));
    }

    #[test]
    fn xref_points_at_objects() {
        let pdf = String::from_utf8(render_pdf(&calculation())).unwrap();

        let startxref: usize = pdf
            .rsplit("startxref\n")
            .next()
            .and_then(|tail| tail.lines().next())
            .and_then(|line| line.parse().ok())
            .unwrap();
        assert!(pdf[startxref..].starts_with("xref\n0 7\n"));

        let entries: Vec<usize> = pdf[startxref..]
            .lines()
            .skip(3)
            .take(6)
            .map(|line| line[..10].parse().unwrap())
            .collect();
        for (index, offset) in entries.iter().enumerate() {
            assert!(pdf[*offset..].starts_with(&format!("{} 0 obj", index + 1)));
        }
    }
}
