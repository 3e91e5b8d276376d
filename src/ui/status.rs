//! Verification status view
//!
//! Maps the step of the SMS verification flow to the text shown while the
//! request is being sent. Steps outside the send-request phase render nothing.

use ratatui::{prelude::*, widgets::*};

/// Steps of the SMS verification flow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationStep {
    GatheringData,
    GatheredData,
    PostingRequest,
    PostedRequest,
    RequestingSms,
    RequestedSms,
    QueryCode,
    PostingConfirmation,
    PostedConfirmation,
    Done,
}

/// Transaction hash with its confirmation target
#[derive(Clone, Debug, PartialEq)]
pub struct TxHash<'a> {
    pub hash: Option<&'a str>,
    pub max_confirmations: u32,
}

impl<'a> TxHash<'a> {
    pub fn new(hash: Option<&'a str>, max_confirmations: u32) -> Self {
        TxHash {
            hash,
            max_confirmations,
        }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        match self.hash {
            Some(hash) => {
                let plural = if self.max_confirmations == 1 { "" } else { "s" };
                vec![
                    Line::from(vec![
                        Span::raw("Transaction hash: "),
                        Span::styled(hash, Style::default().fg(Color::Cyan)),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "waiting for {} confirmation{}",
                            self.max_confirmations, plural
                        ),
                        Style::default().fg(Color::DarkGray),
                    )),
                ]
            }
            None => vec![Line::from(Span::styled(
                "waiting for transaction hash",
                Style::default().fg(Color::DarkGray),
            ))],
        }
    }
}

/// Status text for the send-request phase
#[derive(Clone, Debug, PartialEq)]
pub struct SendRequest<'a> {
    pub step: VerificationStep,
    pub tx: Option<&'a str>,
}

impl<'a> SendRequest<'a> {
    pub fn new(step: VerificationStep, tx: Option<&'a str>) -> Self {
        SendRequest { step, tx }
    }

    /// Lines to display, `None` when this step shows nothing
    pub fn lines(&self) -> Option<Vec<Line<'a>>> {
        match self.step {
            VerificationStep::PostingRequest => Some(vec![Line::from(
                "A verification request will be sent to the contract. Please authorize this using the Parity Signer.",
            )]),
            VerificationStep::PostedRequest => {
                let mut lines = TxHash::new(self.tx, 1).lines();
                lines.push(Line::from("Please keep this window open."));
                Some(lines)
            }
            VerificationStep::RequestingSms => {
                Some(vec![Line::from("Requesting an SMS from the Parity server.")])
            }
            _ => None,
        }
    }

    fn alignment(&self) -> Alignment {
        match self.step {
            VerificationStep::PostedRequest => Alignment::Center,
            _ => Alignment::Left,
        }
    }
}

impl Widget for SendRequest<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let alignment = self.alignment();
        if let Some(lines) = self.lines() {
            Paragraph::new(lines)
                .alignment(alignment)
                .wrap(Wrap { trim: false })
                .render(area, buf);
        }
    }
}
