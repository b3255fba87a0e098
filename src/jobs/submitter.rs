//! Job submission: prompt assembly, the provider call, and id translation.
use crate::error::AppResult;
use crate::jobs::tracker::JobTracker;
use crate::jobs::JobKind;
use crate::prompt::builder;
use crate::prompt::styles;
use crate::provider::client::ProviderClient;

/// Outcome of a submission, tagged by how the returned id must be used.
///
/// The two kinds are deliberately asymmetric: image transforms wrap the
/// provider id behind a gateway handle, video animations hand the provider
/// id straight back to the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionReceipt {
    /// Gateway-issued handle, mapped internally to the provider job.
    Tracked(String),
    /// Provider job id returned to the client unchanged.
    Passthrough(String),
}

impl SubmissionReceipt {
    pub fn id(&self) -> &str {
        match self {
            SubmissionReceipt::Tracked(id) | SubmissionReceipt::Passthrough(id) => id,
        }
    }
}

/// Model version strings the gateway submits against, fixed at startup.
#[derive(Clone, Debug)]
pub struct ModelCatalog {
    pub image: String,
    pub video: String,
    pub dance_video: String,
}

pub struct JobSubmitter {
    client: ProviderClient,
    models: ModelCatalog,
    tracker: JobTracker,
}

impl JobSubmitter {
    pub fn new(client: ProviderClient, models: ModelCatalog, tracker: JobTracker) -> Self {
        JobSubmitter { client, models, tracker }
    }

    /// Submit one generation job and translate the provider id per job kind.
    pub async fn submit(
        &self,
        kind: JobKind,
        image: &[u8],
        content_type: Option<&str>,
        style_id: &str,
    ) -> AppResult<SubmissionReceipt> {
        let data_url = builder::image_data_url(image, content_type);
        let (model, input) = match kind {
            JobKind::Image => {
                let spec = styles::resolve_image_style(style_id);
                let prompt = builder::build_image_prompt(spec);
                (self.models.image.as_str(), builder::image_input(&prompt, &data_url))
            }
            JobKind::Video => {
                let spec = styles::resolve_video_style(style_id);
                let prompt = builder::build_video_prompt(spec);
                let model = if spec.high_energy {
                    self.models.dance_video.as_str()
                } else {
                    self.models.video.as_str()
                };
                (model, builder::video_input(&prompt, &data_url, spec.high_energy))
            }
        };

        let provider_id = self.client.create_prediction(model, input).await?;
        match kind {
            JobKind::Image => {
                let handle = self.tracker.register(&provider_id).await;
                tracing::info!("Registered image job {} -> provider {}", handle, provider_id);
                Ok(SubmissionReceipt::Tracked(handle))
            }
            JobKind::Video => Ok(SubmissionReceipt::Passthrough(provider_id)),
        }
    }
}
