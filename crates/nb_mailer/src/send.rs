use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use nb_core::config::MailConfig;
use nb_core::{Error, Result};
use tracing::info;

/// SMTP delivery. Recipients are blind-copied in batches, one message per
/// batch, so a large distribution list never lands in a single huge header.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: MailConfig,
}

impl Mailer {
    pub fn new(config: MailConfig, username: &str, password: &str) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| Error::Mail(format!("SMTP relay setup failed: {}", e)))?
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();
        Ok(Self { transport, config })
    }

    /// Sends the rendered report to every configured recipient. Returns the
    /// number of recipients the transport accepted messages for.
    pub async fn send_report(&self, subject: &str, html: &str) -> Result<usize> {
        let batch_size = self.config.batch_size.max(1);
        let mut sent = 0;
        for batch in self.config.recipients.chunks(batch_size) {
            let message = self.build_message(subject, html, batch)?;
            self.transport
                .send(message)
                .await
                .map_err(|e| Error::Mail(format!("SMTP send failed: {}", e)))?;
            sent += batch.len();
            info!("📧 Sent briefing batch to {} recipient(s)", batch.len());
        }
        Ok(sent)
    }

    /// One message per batch: HTML body plus the same report attached as a
    /// file, recipients on Bcc, the sender on To.
    fn build_message(&self, subject: &str, html: &str, recipients: &[String]) -> Result<Message> {
        let from: Mailbox = self
            .config
            .from
            .parse()
            .map_err(|e| Error::Mail(format!("invalid from address: {}", e)))?;

        let mut builder = Message::builder()
            .from(from.clone())
            .to(from)
            .subject(subject);
        for recipient in recipients {
            let mailbox: Mailbox = recipient
                .parse()
                .map_err(|e| Error::Mail(format!("invalid recipient {}: {}", recipient, e)))?;
            builder = builder.bcc(mailbox);
        }

        let attachment = Attachment::new("briefing.html".to_string())
            .body(html.as_bytes().to_vec(), ContentType::TEXT_HTML);
        builder
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::html(html.to_string()))
                    .singlepart(attachment),
            )
            .map_err(|e| Error::Mail(format!("message assembly failed: {}", e)))
    }
}
