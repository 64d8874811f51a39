//! Generation Service - AI-assisted thread authoring
//!
//! This service orchestrates the five content operations (generate, remix,
//! repurpose, reply, coach). Each operation runs one sequential chain:
//! optional voice pack lookup, prompt build, a single LLM round trip,
//! defensive JSON extraction, per-kind validation and defaulting, and
//! lexical scoring where a tweet array is produced. Nothing is persisted
//! here and nothing is retried; callers decide what to save.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::application::ports::outbound::{
    AnalyticsRepositoryPort, LlmPort, LlmRequest, ThreadRepositoryPort, VoicePackRepositoryPort,
};
use crate::application::services::llm::prompt_builder;
use crate::application::services::llm::response_extractor::{self, ExtractError};
use crate::application::services::scoring::cringe_score;
use crate::domain::value_objects::{
    CoachingStats, HookType, ReplyTone, TargetFormat, UserId, VoiceContext, VoicePackId,
};

/// Number of recent topics fed to the coach prompt
const RECENT_TOPIC_LIMIT: u32 = 5;
/// Neutral midpoint used when the coach response omits a content score
const DEFAULT_CONTENT_SCORE: u32 = 50;

/// Request to generate a fresh thread
#[derive(Debug, Clone)]
pub struct GenerateThreadRequest {
    pub topic: String,
    pub hook_type: HookType,
    pub voice_pack_id: Option<VoicePackId>,
}

/// A generated thread draft with its authenticity verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedThread {
    pub hook_type: HookType,
    pub content: Vec<String>,
    pub cringe_score: u32,
}

/// Request to remix an existing viral thread onto a new topic
#[derive(Debug, Clone)]
pub struct RemixThreadRequest {
    pub original_thread: String,
    pub new_topic: String,
    pub voice_pack_id: Option<VoicePackId>,
}

/// Structure extracted from the source thread during a remix
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixAnalysis {
    pub hook_type: String,
    pub tweet_count: u32,
    pub pattern: String,
    pub key_elements: Vec<String>,
}

/// Result of the remix operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemixedThread {
    pub analysis: RemixAnalysis,
    pub content: Vec<String>,
    pub cringe_score: u32,
}

/// Request to repurpose thread content into another format
#[derive(Debug, Clone)]
pub struct RepurposeRequest {
    pub content: Vec<String>,
    pub target_format: TargetFormat,
    pub voice_pack_id: Option<VoicePackId>,
}

/// Result of the repurpose operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepurposedContent {
    pub format: TargetFormat,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub word_count: u32,
}

/// Request for reply suggestions to a pasted tweet
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub tweet: String,
    pub tone: ReplyTone,
    pub voice_pack_id: Option<VoicePackId>,
}

/// Result of the reply operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplySuggestions {
    pub replies: Vec<String>,
}

/// Result of the coach operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingReport {
    pub tips: Vec<String>,
    pub content_score: u32,
    pub stats: CoachingStats,
}

/// Errors that can occur during a generation operation
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// A required caller-supplied field is missing or malformed;
    /// detected before any external call
    #[error("invalid request: {0}")]
    Input(String),
    /// The LLM response could not be interpreted as the expected JSON shape
    #[error(transparent)]
    Parse(#[from] ExtractError),
    /// The parsed structure is missing a semantically required field
    #[error("missing required field: {0}")]
    Validation(String),
    /// The LLM call itself failed
    #[error("LLM error: {0}")]
    Upstream(String),
    /// The persistence collaborator failed during context resolution
    #[error("storage error: {0}")]
    Storage(String),
}

/// Service orchestrating AI-powered content operations
pub struct GenerationService<L: LlmPort> {
    llm: L,
    voice_packs: Arc<dyn VoicePackRepositoryPort>,
    threads: Arc<dyn ThreadRepositoryPort>,
    analytics: Arc<dyn AnalyticsRepositoryPort>,
}

impl<L: LlmPort> GenerationService<L> {
    pub fn new(
        llm: L,
        voice_packs: Arc<dyn VoicePackRepositoryPort>,
        threads: Arc<dyn ThreadRepositoryPort>,
        analytics: Arc<dyn AnalyticsRepositoryPort>,
    ) -> Self {
        Self {
            llm,
            voice_packs,
            threads,
            analytics,
        }
    }

    /// Generate a fresh thread about a topic
    #[instrument(skip(self, request), fields(hook_type = %request.hook_type))]
    pub async fn generate_thread(
        &self,
        request: GenerateThreadRequest,
    ) -> Result<GeneratedThread, GenerationError> {
        if request.topic.trim().is_empty() {
            return Err(GenerationError::Input("topic is required".to_string()));
        }

        let voice = self.resolve_voice(request.voice_pack_id).await?;
        let system_prompt = prompt_builder::build_generate_prompt(request.hook_type, voice.as_ref());
        let user_message = prompt_builder::generate_user_message(&request.topic);

        let response = self.call_llm(system_prompt, user_message).await?;

        let tweets = response_extractor::string_items(response_extractor::extract_array(&response)?);
        if tweets.is_empty() {
            return Err(GenerationError::Validation("thread content".to_string()));
        }

        let score = cringe_score(&tweets);
        debug!(tweet_count = tweets.len(), cringe_score = score, "Generated thread");

        Ok(GeneratedThread {
            hook_type: request.hook_type,
            content: tweets,
            cringe_score: score,
        })
    }

    /// Remix a viral thread's structure around a new topic
    #[instrument(skip(self, request))]
    pub async fn remix_thread(
        &self,
        request: RemixThreadRequest,
    ) -> Result<RemixedThread, GenerationError> {
        if request.original_thread.trim().is_empty() {
            return Err(GenerationError::Input(
                "original thread is required".to_string(),
            ));
        }
        if request.new_topic.trim().is_empty() {
            return Err(GenerationError::Input("new topic is required".to_string()));
        }

        let voice = self.resolve_voice(request.voice_pack_id).await?;
        let system_prompt = prompt_builder::build_remix_prompt(voice.as_ref());
        let user_message =
            prompt_builder::remix_user_message(&request.original_thread, &request.new_topic);

        let response = self.call_llm(system_prompt, user_message).await?;
        let object = response_extractor::extract_object(&response)?;

        let analysis_value = object
            .get("analysis")
            .and_then(Value::as_object)
            .ok_or_else(|| GenerationError::Validation("analysis".to_string()))?;

        let tweets = object
            .get("remixedThread")
            .and_then(Value::as_array)
            .filter(|items| !items.is_empty())
            .map(|items| response_extractor::string_items(items.clone()))
            .ok_or_else(|| GenerationError::Validation("remixedThread".to_string()))?;

        // Optional analysis fields degrade to defaults rather than failing
        let analysis = RemixAnalysis {
            hook_type: analysis_value
                .get("hookType")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            tweet_count: analysis_value
                .get("tweetCount")
                .and_then(Value::as_u64)
                .unwrap_or(tweets.len() as u64) as u32,
            pattern: analysis_value
                .get("pattern")
                .and_then(Value::as_str)
                .unwrap_or("Pattern analysis not available")
                .to_string(),
            key_elements: analysis_value
                .get("keyElements")
                .and_then(Value::as_array)
                .map(|items| response_extractor::string_items(items.clone()))
                .unwrap_or_default(),
        };

        let score = cringe_score(&tweets);
        debug!(tweet_count = tweets.len(), cringe_score = score, "Remixed thread");

        Ok(RemixedThread {
            analysis,
            content: tweets,
            cringe_score: score,
        })
    }

    /// Repurpose thread content into another format
    #[instrument(skip(self, request), fields(format = %request.target_format))]
    pub async fn repurpose_thread(
        &self,
        request: RepurposeRequest,
    ) -> Result<RepurposedContent, GenerationError> {
        if request.content.iter().all(|t| t.trim().is_empty()) {
            return Err(GenerationError::Input(
                "thread content is required".to_string(),
            ));
        }

        let voice = self.resolve_voice(request.voice_pack_id).await?;
        let system_prompt =
            prompt_builder::build_repurpose_prompt(request.target_format, voice.as_ref());
        let user_message = prompt_builder::repurpose_user_message(&request.content);

        let response = self.call_llm(system_prompt, user_message).await?;
        let object = response_extractor::extract_object(&response)?;

        let content = object
            .get("content")
            .and_then(Value::as_str)
            .ok_or_else(|| GenerationError::Validation("content".to_string()))?
            .to_string();

        let title = object
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Untitled")
            .to_string();
        let summary = object
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let word_count = content.split_whitespace().count() as u32;

        Ok(RepurposedContent {
            format: request.target_format,
            title,
            content,
            summary,
            word_count,
        })
    }

    /// Suggest replies to a pasted tweet
    #[instrument(skip(self, request), fields(tone = %request.tone))]
    pub async fn suggest_replies(
        &self,
        request: ReplyRequest,
    ) -> Result<ReplySuggestions, GenerationError> {
        if request.tweet.trim().is_empty() {
            return Err(GenerationError::Input("tweet is required".to_string()));
        }

        let voice = self.resolve_voice(request.voice_pack_id).await?;
        let system_prompt = prompt_builder::build_reply_prompt(request.tone, voice.as_ref());
        let user_message = prompt_builder::reply_user_message(&request.tweet);

        let response = self.call_llm(system_prompt, user_message).await?;

        let replies =
            response_extractor::string_items(response_extractor::extract_array(&response)?);
        if replies.is_empty() {
            return Err(GenerationError::Validation("replies".to_string()));
        }

        Ok(ReplySuggestions { replies })
    }

    /// Produce coaching tips from the user's aggregate stats
    #[instrument(skip(self))]
    pub async fn coaching_tips(&self, user_id: UserId) -> Result<CoachingReport, GenerationError> {
        let stats = self.collect_stats(user_id).await?;

        let system_prompt = prompt_builder::build_coach_prompt(&stats);
        let user_message = prompt_builder::coach_user_message();

        let response = self.call_llm(system_prompt, user_message).await?;
        let object = response_extractor::extract_object(&response)?;

        let tips = object
            .get("tips")
            .and_then(Value::as_array)
            .filter(|items| !items.is_empty())
            .map(|items| response_extractor::string_items(items.clone()))
            .ok_or_else(|| GenerationError::Validation("tips".to_string()))?;

        let content_score = object
            .get("contentScore")
            .and_then(Value::as_u64)
            .map(|s| s.min(100) as u32)
            .unwrap_or(DEFAULT_CONTENT_SCORE);

        Ok(CoachingReport {
            tips,
            content_score,
            stats,
        })
    }

    /// Resolve optional voice pack context.
    ///
    /// A supplied but unknown ID means no voice context, not an error.
    async fn resolve_voice(
        &self,
        voice_pack_id: Option<VoicePackId>,
    ) -> Result<Option<VoiceContext>, GenerationError> {
        let Some(id) = voice_pack_id else {
            return Ok(None);
        };

        let pack = self
            .voice_packs
            .get(id)
            .await
            .map_err(|e| GenerationError::Storage(e.to_string()))?;

        Ok(pack.map(|p| p.voice_context()))
    }

    /// Assemble the aggregate stats the coach prompt consumes
    async fn collect_stats(&self, user_id: UserId) -> Result<CoachingStats, GenerationError> {
        let thread_count = self
            .threads
            .count(user_id)
            .await
            .map_err(|e| GenerationError::Storage(e.to_string()))?;

        let summary = self
            .analytics
            .summary(user_id)
            .await
            .map_err(|e| GenerationError::Storage(e.to_string()))?;

        let recent_topics = self
            .threads
            .list_recent_topics(user_id, RECENT_TOPIC_LIMIT)
            .await
            .map_err(|e| GenerationError::Storage(e.to_string()))?;

        Ok(CoachingStats {
            thread_count,
            avg_engagement_rate: summary.engagement_rate,
            recent_topics,
        })
    }

    /// Issue the single LLM round trip for an operation
    async fn call_llm(
        &self,
        system_prompt: String,
        user_message: String,
    ) -> Result<String, GenerationError> {
        let request = LlmRequest::single(system_prompt, user_message);

        let response = self
            .llm
            .generate(request)
            .await
            .map_err(|e| GenerationError::Upstream(e.to_string()))?;

        debug!(
            model = %response.model,
            tokens_used = response.tokens_used,
            "LLM round trip complete"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::Result;
    use async_trait::async_trait;

    use crate::application::ports::outbound::LlmResponse;
    use crate::domain::entities::{Thread, ThreadAnalytics, VoicePack};
    use crate::domain::value_objects::{AnalyticsSummary, ThreadId};

    /// Mock LLM returning a canned response and counting calls
    struct MockLlm {
        response: Option<String>,
        calls: AtomicUsize,
    }

    impl MockLlm {
        fn replying(response: &str) -> Self {
            Self {
                response: Some(response.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LlmPort for MockLlm {
        type Error = std::io::Error;

        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, Self::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Some(content) => Ok(LlmResponse {
                    content: content.clone(),
                    model: "mock".to_string(),
                    tokens_used: 0,
                }),
                None => Err(std::io::Error::other("model unavailable")),
            }
        }
    }

    /// Voice pack store holding at most one pack
    struct StubVoicePacks {
        pack: Option<VoicePack>,
    }

    #[async_trait]
    impl VoicePackRepositoryPort for StubVoicePacks {
        async fn create(&self, _pack: &VoicePack) -> Result<()> {
            unimplemented!("not used by generation tests")
        }

        async fn get(&self, id: VoicePackId) -> Result<Option<VoicePack>> {
            Ok(self.pack.clone().filter(|p| p.id == id))
        }

        async fn list(&self, _user_id: UserId) -> Result<Vec<VoicePack>> {
            Ok(self.pack.clone().into_iter().collect())
        }

        async fn update(&self, _pack: &VoicePack) -> Result<()> {
            unimplemented!("not used by generation tests")
        }

        async fn delete(&self, _id: VoicePackId) -> Result<()> {
            unimplemented!("not used by generation tests")
        }
    }

    struct StubThreads {
        topics: Vec<String>,
    }

    #[async_trait]
    impl ThreadRepositoryPort for StubThreads {
        async fn create(&self, _thread: &Thread) -> Result<()> {
            unimplemented!("not used by generation tests")
        }

        async fn get(&self, _id: ThreadId) -> Result<Option<Thread>> {
            Ok(None)
        }

        async fn list(&self, _user_id: UserId) -> Result<Vec<Thread>> {
            Ok(vec![])
        }

        async fn update(&self, _thread: &Thread) -> Result<()> {
            unimplemented!("not used by generation tests")
        }

        async fn delete(&self, _id: ThreadId) -> Result<()> {
            unimplemented!("not used by generation tests")
        }

        async fn list_recent_topics(&self, _user_id: UserId, limit: u32) -> Result<Vec<String>> {
            Ok(self.topics.iter().take(limit as usize).cloned().collect())
        }

        async fn count(&self, _user_id: UserId) -> Result<u64> {
            Ok(self.topics.len() as u64)
        }
    }

    struct StubAnalytics {
        summary: AnalyticsSummary,
    }

    #[async_trait]
    impl AnalyticsRepositoryPort for StubAnalytics {
        async fn create(&self, _analytics: &ThreadAnalytics) -> Result<()> {
            unimplemented!("not used by generation tests")
        }

        async fn list(&self, _user_id: UserId) -> Result<Vec<ThreadAnalytics>> {
            Ok(vec![])
        }

        async fn summary(&self, _user_id: UserId) -> Result<AnalyticsSummary> {
            Ok(self.summary.clone())
        }
    }

    fn service(llm: MockLlm) -> GenerationService<MockLlm> {
        GenerationService::new(
            llm,
            Arc::new(StubVoicePacks { pack: None }),
            Arc::new(StubThreads {
                topics: vec!["rust".to_string(), "writing".to_string()],
            }),
            Arc::new(StubAnalytics {
                summary: AnalyticsSummary {
                    total_impressions: 1000,
                    total_likes: 30,
                    total_replies: 10,
                    total_retweets: 10,
                    total_profile_clicks: 5,
                    engagement_rate: 5.0,
                },
            }),
        )
    }

    #[tokio::test]
    async fn test_generate_thread_happy_path() {
        let svc = service(MockLlm::replying(
            r#"Here you go: ["First tweet", "Second tweet", "Third tweet"]"#,
        ));

        let result = svc
            .generate_thread(GenerateThreadRequest {
                topic: "shipping side projects".to_string(),
                hook_type: HookType::Story,
                voice_pack_id: None,
            })
            .await
            .unwrap();

        assert_eq!(result.content.len(), 3);
        assert_eq!(result.cringe_score, 0);
        assert_eq!(result.hook_type, HookType::Story);
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_topic_before_llm_call() {
        let llm = MockLlm::replying(r#"["tweet"]"#);
        let svc = service(llm);

        let err = svc
            .generate_thread(GenerateThreadRequest {
                topic: "   ".to_string(),
                hook_type: HookType::Negative,
                voice_pack_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Input(_)));
        assert_eq!(svc.llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_scores_jargon() {
        let svc = service(MockLlm::replying(
            r#"["Leverage the grind every day", "Keep the hustle alive"]"#,
        ));

        let result = svc
            .generate_thread(GenerateThreadRequest {
                topic: "growth".to_string(),
                hook_type: HookType::Numbers,
                voice_pack_id: None,
            })
            .await
            .unwrap();

        // leverage + grind + hustle
        assert_eq!(result.cringe_score, 30);
    }

    #[tokio::test]
    async fn test_upstream_failure_surfaces_without_partial_result() {
        let svc = service(MockLlm::failing());

        let err = svc
            .generate_thread(GenerateThreadRequest {
                topic: "anything".to_string(),
                hook_type: HookType::List,
                voice_pack_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_remix_requires_analysis() {
        let svc = service(MockLlm::replying(r#"{"remixedThread": ["a", "b"]}"#));

        let err = svc
            .remix_thread(RemixThreadRequest {
                original_thread: "1/ hook\n2/ body".to_string(),
                new_topic: "cooking".to_string(),
                voice_pack_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Validation(field) if field == "analysis"));
    }

    #[tokio::test]
    async fn test_remix_requires_non_empty_thread() {
        let svc = service(MockLlm::replying(
            r#"{"analysis": {"hookType": "story"}, "remixedThread": []}"#,
        ));

        let err = svc
            .remix_thread(RemixThreadRequest {
                original_thread: "1/ hook".to_string(),
                new_topic: "cooking".to_string(),
                voice_pack_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Validation(field) if field == "remixedThread"));
    }

    #[tokio::test]
    async fn test_remix_defaults_optional_analysis_fields() {
        let svc = service(MockLlm::replying(
            r#"{"analysis": {}, "remixedThread": ["one", "two", "three"]}"#,
        ));

        let result = svc
            .remix_thread(RemixThreadRequest {
                original_thread: "1/ hook".to_string(),
                new_topic: "cooking".to_string(),
                voice_pack_id: None,
            })
            .await
            .unwrap();

        assert_eq!(result.analysis.hook_type, "unknown");
        assert_eq!(result.analysis.pattern, "Pattern analysis not available");
        assert!(result.analysis.key_elements.is_empty());
        assert_eq!(result.analysis.tweet_count, 3);
    }

    #[tokio::test]
    async fn test_repurpose_word_count() {
        let svc = service(MockLlm::replying(
            r#"{"title": "Post", "content": "one two three four", "summary": "s"}"#,
        ));

        let result = svc
            .repurpose_thread(RepurposeRequest {
                content: vec!["tweet one".to_string()],
                target_format: TargetFormat::Linkedin,
                voice_pack_id: None,
            })
            .await
            .unwrap();

        assert_eq!(result.word_count, 4);
        assert_eq!(result.title, "Post");
    }

    #[tokio::test]
    async fn test_repurpose_requires_content_field() {
        let svc = service(MockLlm::replying(r#"{"title": "Post"}"#));

        let err = svc
            .repurpose_thread(RepurposeRequest {
                content: vec!["tweet".to_string()],
                target_format: TargetFormat::Newsletter,
                voice_pack_id: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Validation(field) if field == "content"));
    }

    #[tokio::test]
    async fn test_repurpose_defaults_title_and_summary() {
        let svc = service(MockLlm::replying(r#"{"content": "body text here"}"#));

        let result = svc
            .repurpose_thread(RepurposeRequest {
                content: vec!["tweet".to_string()],
                target_format: TargetFormat::Script,
                voice_pack_id: None,
            })
            .await
            .unwrap();

        assert_eq!(result.title, "Untitled");
        assert_eq!(result.summary, "");
    }

    #[tokio::test]
    async fn test_reply_suggestions() {
        let svc = service(MockLlm::replying(
            r#"Options: ["Reply A", "Reply B", "Reply C"]"#,
        ));

        let result = svc
            .suggest_replies(ReplyRequest {
                tweet: "Everyone should write more".to_string(),
                tone: ReplyTone::Insightful,
                voice_pack_id: None,
            })
            .await
            .unwrap();

        assert_eq!(result.replies.len(), 3);
    }

    #[tokio::test]
    async fn test_coach_report_assembles_stats_and_defaults_score() {
        let svc = service(MockLlm::replying(
            r#"{"tips": ["Post threads before 9am", "Reply to larger accounts"]}"#,
        ));

        let report = svc.coaching_tips(UserId::new()).await.unwrap();

        assert_eq!(report.tips.len(), 2);
        assert_eq!(report.content_score, 50);
        assert_eq!(report.stats.thread_count, 2);
        assert_eq!(report.stats.recent_topics, vec!["rust", "writing"]);
        assert!((report.stats.avg_engagement_rate - 5.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_coach_requires_tips() {
        let svc = service(MockLlm::replying(r#"{"contentScore": 70}"#));

        let err = svc.coaching_tips(UserId::new()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Validation(field) if field == "tips"));
    }

    #[tokio::test]
    async fn test_voice_context_resolved_when_pack_exists() {
        let pack = VoicePack::new(UserId::new(), "My Voice")
            .with_style("casual")
            .with_samples(vec!["sample".to_string()]);
        let pack_id = pack.id;

        let svc = GenerationService::new(
            MockLlm::replying(r#"["tweet one", "tweet two"]"#),
            Arc::new(StubVoicePacks { pack: Some(pack) }),
            Arc::new(StubThreads { topics: vec![] }),
            Arc::new(StubAnalytics {
                summary: AnalyticsSummary::default(),
            }),
        );

        // Known pack id resolves; unknown id silently degrades to no voice
        let result = svc
            .generate_thread(GenerateThreadRequest {
                topic: "voice test".to_string(),
                hook_type: HookType::Story,
                voice_pack_id: Some(pack_id),
            })
            .await;
        assert!(result.is_ok());

        let result = svc
            .generate_thread(GenerateThreadRequest {
                topic: "voice test".to_string(),
                hook_type: HookType::Story,
                voice_pack_id: Some(VoicePackId::new()),
            })
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_non_string_tweets_become_placeholders() {
        let svc = service(MockLlm::replying(r#"["fine", 42, "also fine"]"#));

        let result = svc
            .generate_thread(GenerateThreadRequest {
                topic: "robustness".to_string(),
                hook_type: HookType::List,
                voice_pack_id: None,
            })
            .await
            .unwrap();

        assert_eq!(result.content[1], response_extractor::UNREADABLE_SEGMENT);
    }
}
