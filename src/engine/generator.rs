//! 内容生成入口
//!
//! 每个工具一个 `generate_*` 方法，形状统一：
//! 校验输入 → 检测类别/语气 → 选择记录或模板 → 逐步输出 → 返回结果。
//! 空输入在任何进度通知之前被拒绝。

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::GenerationConfig;
use crate::engine::detection::{
    detect_caption_tone, detect_category, detect_image_prompt_style, detect_message_type,
    detect_script_style, detect_tone,
};
use crate::engine::emitter::{Pacing, emit_percent_steps, emit_progressively, sleep_or_cancel};
use crate::engine::matcher::find_best_match;
use crate::engine::picker::{RandomSource, default_random, pick_random, pick_seeded};
use crate::engine::templates::{
    TextTemplate, caption_templates, image_prompt_templates, message_templates, post_templates,
    script_templates, thumbnail_hooks, thumbnail_styles,
};
use crate::engine::topic::{extract_topic, extract_url_context, is_url};
use crate::error::{AppError, Result};
use crate::models::catalog::{
    AVATAR_CATALOG, NO_MATCH_VIDEO_DESCRIPTION, NO_MATCH_VIDEO_TITLE, THUMBNAIL_CATALOG,
    VIDEO_CATALOG,
};
use crate::models::result::{
    AvatarResult, CaptionResult, GenerationResult, ImageResult, Progress, ProgressCallback,
    ScriptResult, TextResult, ThumbnailResult, ToolKind, VideoResult,
};
use crate::services::backend::{
    BackendActor, TextImagePrompt, UnavailableBackend, VideoPrompt, classify_backend_error,
};

const THUMBNAIL_EMPTY_PROMPT: &str = "Please enter a topic or URL to generate a thumbnail.";
const THUMBNAIL_TEXT_WORDS: usize = 5;

/// 内容生成器
///
/// 模板和目录是进程级只读数据，生成器本身无可变状态，可在任务间共享。
pub struct ContentGenerator {
    config: GenerationConfig,
    random: Arc<dyn RandomSource>,
    backend: Arc<dyn BackendActor>,
}

impl ContentGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            random: default_random(),
            backend: Arc::new(UnavailableBackend),
        }
    }

    /// 替换随机源（测试用固定序列）
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    pub fn with_backend(mut self, backend: Arc<dyn BackendActor>) -> Self {
        self.backend = backend;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// 按工具类型分发
    pub async fn generate(
        &self,
        tool: ToolKind,
        input: &str,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<GenerationResult> {
        info!(tool = %tool, input_chars = input.chars().count(), "开始生成");

        let result = match tool {
            ToolKind::Video => self
                .generate_video(input, progress, cancel)
                .await
                .map(GenerationResult::Video),
            ToolKind::Avatar => self
                .generate_avatar(input, progress, cancel)
                .await
                .map(GenerationResult::Avatar),
            ToolKind::Post => self
                .generate_post(input, progress, cancel)
                .await
                .map(|text| GenerationResult::Text(TextResult { text })),
            ToolKind::Message => self
                .generate_message(input, progress, cancel)
                .await
                .map(|text| GenerationResult::Text(TextResult { text })),
            ToolKind::ImagePrompt => self
                .generate_image_prompt(input, progress, cancel)
                .await
                .map(|text| GenerationResult::Text(TextResult { text })),
            ToolKind::Caption => self
                .generate_caption(input, progress, cancel)
                .await
                .map(GenerationResult::Caption),
            ToolKind::Thumbnail => self
                .generate_thumbnail(input, progress, cancel)
                .await
                .map(GenerationResult::Thumbnail),
            ToolKind::Script => self
                .generate_script(input, progress, cancel)
                .await
                .map(GenerationResult::Script),
        };

        match &result {
            Ok(_) => info!(tool = %tool, "生成完成"),
            Err(AppError::Cancelled) => info!(tool = %tool, "生成已取消"),
            Err(e) => warn!(tool = %tool, error = %e, "生成失败"),
        }

        result
    }

    /// 视频：按关键词匹配视频目录，无匹配时返回 `no_match` 结果而不是错误
    pub async fn generate_video(
        &self,
        prompt: &str,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<VideoResult> {
        let prompt = require_prompt(prompt)?;
        self.run_steps(self.config.video_steps, progress, cancel)
            .await?;

        let prompt_caption = extract_topic(prompt);
        let result = match find_best_match(VIDEO_CATALOG, prompt) {
            Some(record) => {
                debug!(title = record.title, category = %record.category, "匹配到视频");
                VideoResult {
                    video_url: Some(record.video_url.to_string()),
                    thumbnail: Some(record.thumbnail.to_string()),
                    title: record.title.to_string(),
                    description: record.description.to_string(),
                    prompt_caption,
                    no_match: false,
                }
            }
            None => {
                debug!("没有匹配的视频");
                VideoResult {
                    video_url: None,
                    thumbnail: None,
                    title: NO_MATCH_VIDEO_TITLE.to_string(),
                    description: NO_MATCH_VIDEO_DESCRIPTION.to_string(),
                    prompt_caption,
                    no_match: true,
                }
            }
        };

        Ok(result)
    }

    /// 头像：无匹配时随机选一个
    pub async fn generate_avatar(
        &self,
        prompt: &str,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<AvatarResult> {
        let prompt = require_prompt(prompt)?;
        self.run_steps(self.config.avatar_steps, progress, cancel)
            .await?;

        let record = match find_best_match(AVATAR_CATALOG, prompt) {
            Some(record) => record,
            None => self.pick(AVATAR_CATALOG)?,
        };

        Ok(AvatarResult {
            image: record.image.to_string(),
            style: record.style.to_string(),
        })
    }

    pub async fn generate_post(
        &self,
        prompt: &str,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let prompt = require_prompt(prompt)?;
        let tone = detect_tone(prompt);
        debug!(?tone, "帖子语气");
        self.render_text(
            prompt,
            post_templates(tone),
            self.config.post_word_delay_ms,
            progress,
            cancel,
        )
        .await
    }

    pub async fn generate_message(
        &self,
        prompt: &str,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let prompt = require_prompt(prompt)?;
        let kind = detect_message_type(prompt);
        debug!(?kind, "消息类型");
        self.render_text(
            prompt,
            message_templates(kind),
            self.config.message_word_delay_ms,
            progress,
            cancel,
        )
        .await
    }

    pub async fn generate_image_prompt(
        &self,
        prompt: &str,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let prompt = require_prompt(prompt)?;
        let style = detect_image_prompt_style(prompt);
        debug!(?style, "图像提示词风格");
        self.render_text(
            prompt,
            image_prompt_templates(style),
            self.config.image_prompt_word_delay_ms,
            progress,
            cancel,
        )
        .await
    }

    /// 配文：只有配文正文逐词输出，标签随最终结果一起交付
    pub async fn generate_caption(
        &self,
        prompt: &str,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<CaptionResult> {
        let prompt = require_prompt(prompt)?;
        sleep_or_cancel(self.config.text_start_delay(), cancel).await?;

        let tone = detect_caption_tone(prompt);
        debug!(?tone, "配文语气");
        let keywords = extract_topic(prompt);
        let result = self.pick(caption_templates(tone))?.render(&keywords);

        if let Some(on_progress) = progress {
            emit_progressively(
                &result.caption,
                self.pacing(self.config.caption_word_delay_ms),
                self.random.as_ref(),
                cancel,
                |partial, percent| on_progress(Progress::text(percent, partial)),
            )
            .await?;
        }

        Ok(result)
    }

    /// 缩略图
    ///
    /// 输入可以包含 URL：类别检测和目录匹配基于 URL 上下文，
    /// 钩子短语和视觉风格以原始输入为种子，同一输入结果稳定。
    pub async fn generate_thumbnail(
        &self,
        prompt: &str,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<ThumbnailResult> {
        if prompt.trim().is_empty() {
            return Err(AppError::Validation(THUMBNAIL_EMPTY_PROMPT.to_string()));
        }
        self.run_steps(self.config.thumbnail_steps, progress, cancel)
            .await?;

        let has_url = is_url(prompt);
        let context = extract_url_context(prompt);
        let topic = extract_topic(prompt);
        let category = detect_category(&context);

        let thumbnail_text = topic
            .split(' ')
            .take(THUMBNAIL_TEXT_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();

        let hook = pick_seeded(thumbnail_hooks(category), prompt)
            .copied()
            .unwrap_or_default();
        let style = pick_seeded(thumbnail_styles(category), prompt)
            .copied()
            .unwrap_or_default();

        let record = match find_best_match(THUMBNAIL_CATALOG, &context) {
            Some(record) => record,
            None => match THUMBNAIL_CATALOG.iter().find(|t| t.category == category) {
                Some(record) => record,
                None => self.pick(THUMBNAIL_CATALOG)?,
            },
        };
        debug!(%category, has_url, hook, style, "缩略图选择");

        let description = if has_url {
            format!(
                "Thumbnail generated from URL with {} style. Optimized for {} content with maximum engagement and click-through rates.",
                style, category
            )
        } else {
            format!(
                "Thumbnail generated with {} style. Perfect for {} content to engage your audience with compelling visuals.",
                style, category
            )
        };

        Ok(ThumbnailResult {
            image: record.image.to_string(),
            title: format!("{} {}", hook, topic),
            description,
            thumbnail_text,
            hook: hook.to_string(),
            style: style.to_string(),
        })
    }

    /// 脚本：依次输出开场、正文、结尾，段落之间停顿
    ///
    /// 部分结果是完整的结构化脚本，正在输出的段落被截断，之后的段落为空。
    pub async fn generate_script(
        &self,
        prompt: &str,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<ScriptResult> {
        let prompt = require_prompt(prompt)?;
        sleep_or_cancel(self.config.text_start_delay(), cancel).await?;

        let style = detect_script_style(prompt);
        debug!(?style, "脚本风格");
        let topic = extract_topic(prompt);
        let script = self.pick(script_templates(style))?.render(&topic);

        if let Some(on_progress) = progress {
            let pacing = self.pacing(self.config.script_word_delay_ms);
            let sections = [&script.intro, &script.body, &script.outro];

            for (index, section) in sections.into_iter().enumerate() {
                if index > 0 {
                    sleep_or_cancel(self.config.section_pause(), cancel).await?;
                }
                emit_progressively(
                    section,
                    pacing,
                    self.random.as_ref(),
                    cancel,
                    |partial, percent| {
                        let overall = (index * 100 + percent as usize) / sections.len();
                        on_progress(Progress::script(
                            overall as u8,
                            script_snapshot(&script, index, partial),
                        ));
                    },
                )
                .await?;
            }
        }

        Ok(script)
    }

    /// 通过后端生成视频
    ///
    /// 进度节点：5 构建提示词，15/20/30 发送请求，60/75 处理响应，95/100 完成。
    pub async fn generate_video_ai(
        &self,
        request: &VideoPrompt,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<VideoResult> {
        require_prompt(&request.topic)?;
        info!(topic = %request.topic, style = %request.style, "后端视频生成");

        self.run_video_ai(request, progress, cancel)
            .await
            .map_err(classify_backend_error)
    }

    async fn run_video_ai(
        &self,
        request: &VideoPrompt,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<VideoResult> {
        let stage_delay = self.config.backend_stage_delay();

        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        notify(progress, 5);
        let built_prompt = self.backend.build_video_prompt(request).await?;
        notify(progress, 15);
        sleep_or_cancel(stage_delay, cancel).await?;
        notify(progress, 20);
        sleep_or_cancel(stage_delay, cancel).await?;
        notify(progress, 30);

        let video = self.backend.generate_video_ai(request).await?;
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        notify(progress, 60);
        sleep_or_cancel(stage_delay, cancel).await?;
        notify(progress, 75);
        sleep_or_cancel(stage_delay, cancel).await?;

        let content = video.content.filter(|c| !c.is_empty()).ok_or_else(|| {
            AppError::UpstreamApi("No video content received from RunwayML API".to_string())
        })?;

        notify(progress, 95);
        sleep_or_cancel(stage_delay, cancel).await?;
        notify(progress, 100);

        Ok(VideoResult {
            video_url: Some(content),
            thumbnail: None,
            title: video
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("{} - {}", request.topic, request.style)),
            description: format!(
                "Generated {} minute {} video with {} mood via RunwayML API",
                request.duration, request.style, request.mood
            ),
            prompt_caption: built_prompt,
            no_match: false,
        })
    }

    /// 通过后端生成文字图像，进度节点与视频相同
    pub async fn generate_text_image(
        &self,
        request: &TextImagePrompt,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<ImageResult> {
        require_prompt(&request.text)?;
        info!(emotion = %request.emotion, "后端图像生成");

        self.run_text_image(request, progress, cancel)
            .await
            .map_err(classify_backend_error)
    }

    async fn run_text_image(
        &self,
        request: &TextImagePrompt,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<ImageResult> {
        let stage_delay = self.config.backend_stage_delay();

        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        notify(progress, 5);
        self.backend.build_thumbnail_prompt(request).await?;
        notify(progress, 15);
        sleep_or_cancel(stage_delay, cancel).await?;
        notify(progress, 20);
        sleep_or_cancel(stage_delay, cancel).await?;
        notify(progress, 30);

        let image = self.backend.generate_text_image(request).await?;
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        notify(progress, 60);
        sleep_or_cancel(stage_delay, cancel).await?;
        notify(progress, 75);
        sleep_or_cancel(stage_delay, cancel).await?;

        let content = image.content.filter(|c| !c.is_empty()).ok_or_else(|| {
            AppError::UpstreamApi("No image content received from OpenAI API".to_string())
        })?;

        notify(progress, 95);
        sleep_or_cancel(stage_delay, cancel).await?;
        notify(progress, 100);

        Ok(ImageResult {
            image_url: content,
            title: image
                .description
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| format!("{} - {}", request.text, request.emotion)),
            description: format!(
                "Generated with {} emotion and {} color scheme",
                request.emotion,
                image
                    .style
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| request.color_prefs.clone())
            ),
        })
    }

    async fn render_text(
        &self,
        prompt: &str,
        bucket: &[TextTemplate],
        word_delay_ms: u64,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<String> {
        sleep_or_cancel(self.config.text_start_delay(), cancel).await?;

        let topic = extract_topic(prompt);
        let full_text = self.pick(bucket)?.render(&topic);

        if let Some(on_progress) = progress {
            emit_progressively(
                &full_text,
                self.pacing(word_delay_ms),
                self.random.as_ref(),
                cancel,
                |partial, percent| on_progress(Progress::text(percent, partial)),
            )
            .await?;
        }

        Ok(full_text)
    }

    async fn run_steps(
        &self,
        steps: u32,
        progress: Option<ProgressCallback<'_>>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        emit_percent_steps(steps, self.config.step_delay(), cancel, |percent| {
            notify(progress, percent)
        })
        .await
    }

    fn pick<'t, T>(&self, options: &'t [T]) -> Result<&'t T> {
        pick_random(options, self.random.as_ref())
            .ok_or_else(|| AppError::Internal("模板分组为空".to_string()))
    }

    fn pacing(&self, word_delay_ms: u64) -> Pacing {
        Pacing::new(word_delay_ms, self.config.word_jitter_ms)
    }
}

impl Default for ContentGenerator {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

/// 去掉空白后为空的输入直接拒绝
fn require_prompt(prompt: &str) -> Result<&str> {
    if prompt.trim().is_empty() {
        return Err(AppError::empty_prompt());
    }
    Ok(prompt)
}

fn notify(progress: Option<ProgressCallback<'_>>, percent: u8) {
    if let Some(on_progress) = progress {
        on_progress(Progress::percent(percent));
    }
}

fn script_snapshot(script: &ScriptResult, section: usize, partial: &str) -> ScriptResult {
    let mut snapshot = ScriptResult {
        topic: script.topic.clone(),
        ..ScriptResult::default()
    };
    match section {
        0 => snapshot.intro = partial.to_string(),
        1 => {
            snapshot.intro = script.intro.clone();
            snapshot.body = partial.to_string();
        }
        _ => {
            snapshot.intro = script.intro.clone();
            snapshot.body = script.body.clone();
            snapshot.outro = partial.to_string();
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::picker::SequenceRandom;
    use crate::models::result::Partial;
    use crate::services::backend::{GeneratedImage, GeneratedVideo};
    use async_trait::async_trait;
    use parking_lot::Mutex;

    fn generator() -> ContentGenerator {
        ContentGenerator::new(GenerationConfig::instant())
            .with_random(Arc::new(SequenceRandom::constant(0.0)))
    }

    /// 返回固定结果的后端
    struct StubBackend {
        video: Result<GeneratedVideo>,
        image: Result<GeneratedImage>,
    }

    impl StubBackend {
        fn video(video: GeneratedVideo) -> Self {
            Self {
                video: Ok(video),
                image: Ok(GeneratedImage::default()),
            }
        }

        fn image(image: Result<GeneratedImage>) -> Self {
            Self {
                video: Ok(GeneratedVideo::default()),
                image,
            }
        }
    }

    #[async_trait]
    impl BackendActor for StubBackend {
        async fn generate_video_ai(&self, _prompt: &VideoPrompt) -> Result<GeneratedVideo> {
            self.video.clone()
        }

        async fn generate_text_image(&self, _prompt: &TextImagePrompt) -> Result<GeneratedImage> {
            self.image.clone()
        }
    }

    fn backed_by(backend: StubBackend) -> ContentGenerator {
        generator().with_backend(Arc::new(backend))
    }

    fn launch_prompt() -> VideoPrompt {
        VideoPrompt {
            topic: "product launch".into(),
            style: "cinematic".into(),
            mood: "upbeat".into(),
            duration: 1,
        }
    }

    fn joy_prompt() -> TextImagePrompt {
        TextImagePrompt {
            text: "Hello World".into(),
            emotion: "joy".into(),
            color_prefs: "warm".into(),
        }
    }

    #[tokio::test]
    async fn test_video_match() {
        let cancel = CancellationToken::new();
        let result = generator()
            .generate_video("corporate team meeting", None, &cancel)
            .await
            .unwrap();
        assert!(!result.no_match);
        assert_eq!(result.title, "Business Success Story");
        assert!(result.video_url.is_some());
    }

    #[tokio::test]
    async fn test_avatar_falls_back_to_random_record() {
        let cancel = CancellationToken::new();
        let result = generator()
            .generate_avatar("qwertyuiop", None, &cancel)
            .await
            .unwrap();
        assert_eq!(result.image, AVATAR_CATALOG[0].image);
    }

    #[tokio::test]
    async fn test_thumbnail_is_stable_for_same_input() {
        let cancel = CancellationToken::new();
        let generator = generator();
        let first = generator
            .generate_thumbnail("Top 10 esports plays", None, &cancel)
            .await
            .unwrap();
        let second = generator
            .generate_thumbnail("Top 10 esports plays", None, &cancel)
            .await
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first.thumbnail_text, "TOP 10 ESPORTS PLAYS");
        assert!(first.title.starts_with(&first.hook));
        assert!(first.description.contains("gaming"));
    }

    #[tokio::test]
    async fn test_thumbnail_url_description() {
        let cancel = CancellationToken::new();
        let result = generator()
            .generate_thumbnail("https://www.example.com/travel/yoga-retreat", None, &cancel)
            .await
            .unwrap();
        assert!(result.description.starts_with("Thumbnail generated from URL"));
        assert!(result.description.contains("lifestyle"));
    }

    #[tokio::test]
    async fn test_thumbnail_empty_input_message() {
        let cancel = CancellationToken::new();
        let err = generator()
            .generate_thumbnail("  ", None, &cancel)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Validation(THUMBNAIL_EMPTY_PROMPT.to_string()));
    }

    #[tokio::test]
    async fn test_script_partials_fill_sections_in_order() {
        let cancel = CancellationToken::new();
        let seen = Mutex::new(Vec::new());
        let on_progress = |p: Progress| seen.lock().push(p);

        let script = generator()
            .generate_script("How to bake bread", Some(&on_progress), &cancel)
            .await
            .unwrap();

        let seen = seen.into_inner();
        let last = seen.last().unwrap();
        assert_eq!(last.percent, 100);
        assert_eq!(last.partial, Some(Partial::Script(script.clone())));
        assert!(seen.windows(2).all(|w| w[0].percent <= w[1].percent));

        let first = match &seen[0].partial {
            Some(Partial::Script(s)) => s.clone(),
            other => panic!("unexpected partial {:?}", other),
        };
        assert!(first.body.is_empty() && first.outro.is_empty());
        assert_eq!(first.topic, script.topic);
    }

    #[tokio::test]
    async fn test_cancelled_generation_returns_cancelled() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = generator()
            .generate(ToolKind::Post, "write about rust", None, &cancel)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Cancelled);
    }

    #[tokio::test]
    async fn test_video_ai_unavailable_backend() {
        let cancel = CancellationToken::new();
        let seen = Mutex::new(Vec::new());
        let on_progress = |p: Progress| seen.lock().push(p.percent);
        let err = generator()
            .generate_video_ai(&launch_prompt(), Some(&on_progress), &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable { .. }));
        assert!(err.is_retryable());
        assert_eq!(seen.into_inner(), vec![5, 15, 20, 30]);
    }

    #[tokio::test]
    async fn test_video_ai_success_reports_every_milestone() {
        let cancel = CancellationToken::new();
        let seen = Mutex::new(Vec::new());
        let on_progress = |p: Progress| seen.lock().push(p.percent);
        let generator = backed_by(StubBackend::video(GeneratedVideo {
            title: None,
            content: Some("https://cdn.example.com/launch.mp4".into()),
        }));

        let result = generator
            .generate_video_ai(&launch_prompt(), Some(&on_progress), &cancel)
            .await
            .unwrap();

        assert_eq!(seen.into_inner(), vec![5, 15, 20, 30, 60, 75, 95, 100]);
        assert_eq!(
            result.video_url.as_deref(),
            Some("https://cdn.example.com/launch.mp4")
        );
        assert_eq!(result.title, "product launch - cinematic");
        assert_eq!(
            result.prompt_caption,
            "Create a 1-minute cinematic video about product launch with a upbeat mood."
        );
        assert!(!result.no_match);
    }

    #[tokio::test]
    async fn test_video_ai_keeps_backend_title() {
        let cancel = CancellationToken::new();
        let generator = backed_by(StubBackend::video(GeneratedVideo {
            title: Some("Launch Day".into()),
            content: Some("/assets/launch.mp4".into()),
        }));

        let result = generator
            .generate_video_ai(&launch_prompt(), None, &cancel)
            .await
            .unwrap();

        assert_eq!(result.title, "Launch Day");
    }

    #[tokio::test]
    async fn test_video_ai_without_content_is_api_error() {
        let cancel = CancellationToken::new();
        let seen = Mutex::new(Vec::new());
        let on_progress = |p: Progress| seen.lock().push(p.percent);
        let generator = backed_by(StubBackend::video(GeneratedVideo {
            title: Some("Empty".into()),
            content: Some(String::new()),
        }));

        let err = generator
            .generate_video_ai(&launch_prompt(), Some(&on_progress), &cancel)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AppError::UpstreamApi("No video content received from RunwayML API".to_string())
        );
        assert_eq!(seen.into_inner(), vec![5, 15, 20, 30, 60, 75]);
    }

    #[tokio::test]
    async fn test_text_image_falls_back_to_color_prefs_and_text_title() {
        let cancel = CancellationToken::new();
        let generator = backed_by(StubBackend::image(Ok(GeneratedImage {
            content: Some("data:image/png;base64,AAAA".into()),
            description: None,
            style: None,
        })));

        let result = generator
            .generate_text_image(&joy_prompt(), None, &cancel)
            .await
            .unwrap();

        assert_eq!(result.image_url, "data:image/png;base64,AAAA");
        assert_eq!(result.title, "Hello World - joy");
        assert_eq!(
            result.description,
            "Generated with joy emotion and warm color scheme"
        );
    }

    #[tokio::test]
    async fn test_text_image_prefers_backend_style() {
        let cancel = CancellationToken::new();
        let generator = backed_by(StubBackend::image(Ok(GeneratedImage {
            content: Some("/assets/hello.png".into()),
            description: Some("Sunny greeting".into()),
            style: Some("neon".into()),
        })));

        let result = generator
            .generate_text_image(&joy_prompt(), None, &cancel)
            .await
            .unwrap();

        assert_eq!(result.title, "Sunny greeting");
        assert_eq!(
            result.description,
            "Generated with joy emotion and neon color scheme"
        );
    }

    #[tokio::test]
    async fn test_provider_failure_surfaces_as_api_error() {
        let cancel = CancellationToken::new();
        let generator = backed_by(StubBackend::image(Err(AppError::Io(
            "connection reset by peer".into(),
        ))));

        let err = generator
            .generate_text_image(&joy_prompt(), None, &cancel)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "API Error: connection reset by peer");
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_backend_generation_already_cancelled_emits_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let seen = Mutex::new(Vec::new());
        let on_progress = |p: Progress| seen.lock().push(p.percent);
        let generator = backed_by(StubBackend::video(GeneratedVideo::default()));

        let err = generator
            .generate_video_ai(&launch_prompt(), Some(&on_progress), &cancel)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Cancelled);

        let err = generator
            .generate_text_image(&joy_prompt(), Some(&on_progress), &cancel)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Cancelled);
        assert!(seen.into_inner().is_empty());
    }

    #[test]
    fn test_script_snapshot_sections() {
        let script = ScriptResult {
            intro: "i".into(),
            body: "b".into(),
            outro: "o".into(),
            topic: "t".into(),
        };
        let snap = script_snapshot(&script, 1, "partial");
        assert_eq!(snap.intro, "i");
        assert_eq!(snap.body, "partial");
        assert!(snap.outro.is_empty());
    }
}
