/*!
 * Tests for the translation adapter: prompt building, response splitting,
 * and the positional alignment policy
 */

use asstran::errors::{ProviderError, TranslationError};
use asstran::providers::mock::MockProvider;
use asstran::subtitle_processor::DialogueEntry;
use asstran::translation::TranslationService;

fn make_batch(count: usize) -> Vec<DialogueEntry> {
    (0..count)
        .map(|i| {
            DialogueEntry::new(
                format!("0,0:00:{:02}.00,0:00:{:02}.00,Default", i, i + 2),
                format!("line {}", i),
            )
        })
        .collect()
}

/// Test the prompt layout: instruction first, then one text per line
#[test]
fn test_build_prompt_shouldJoinInstructionAndTexts() {
    let service = TranslationService::new(MockProvider::working(), "translate these:");
    let batch = make_batch(3);

    let prompt = service.build_prompt(&batch);

    assert_eq!(prompt, "translate these:\nline 0\nline 1\nline 2");
}

/// Test that a full response pairs every record with its translated line
#[tokio::test]
async fn test_translate_batch_withFullResponse_shouldTranslateEveryEntry() {
    let service = TranslationService::new(MockProvider::working(), "translate:");
    let batch = make_batch(4);

    let translated = service.translate_batch(&batch).await.unwrap();

    assert_eq!(translated.len(), 4);
    for (original, result) in batch.iter().zip(translated.iter()) {
        assert_eq!(result.attributes, original.attributes);
        assert_eq!(result.text, format!("[TRANSLATED] {}", original.text));
    }
}

/// Test the alignment policy when the model answers with fewer lines
#[tokio::test]
async fn test_translate_batch_withShortResponse_shouldDropTrailingRecords() {
    let service = TranslationService::new(MockProvider::truncated(7), "translate:");
    let batch = make_batch(10);

    let translated = service.translate_batch(&batch).await.unwrap();

    assert_eq!(translated.len(), 7);
    for (i, result) in translated.iter().enumerate() {
        assert_eq!(result.attributes, batch[i].attributes);
        assert_eq!(result.text, format!("[TRANSLATED] line {}", i));
    }
}

/// Test that excess response lines are ignored
#[tokio::test]
async fn test_translate_batch_withExcessLines_shouldIgnoreExtras() {
    let service = TranslationService::new(
        MockProvider::with_response("one\ntwo\nthree\nfour\nfive"),
        "translate:",
    );
    let batch = make_batch(3);

    let translated = service.translate_batch(&batch).await.unwrap();

    assert_eq!(translated.len(), 3);
    assert_eq!(translated[0].text, "one");
    assert_eq!(translated[1].text, "two");
    assert_eq!(translated[2].text, "three");
}

/// Test that blank lines in the response are dropped before alignment
#[tokio::test]
async fn test_translate_batch_withBlankResponseLines_shouldSkipThem() {
    let service = TranslationService::new(
        MockProvider::with_response("one\n\n  \ntwo\n"),
        "translate:",
    );
    let batch = make_batch(2);

    let translated = service.translate_batch(&batch).await.unwrap();

    assert_eq!(translated.len(), 2);
    assert_eq!(translated[0].text, "one");
    assert_eq!(translated[1].text, "two");
}

/// Test that a whitespace-only response surfaces as an empty-response error
#[tokio::test]
async fn test_translate_batch_withEmptyResponse_shouldFail() {
    let service = TranslationService::new(MockProvider::empty(), "translate:");
    let batch = make_batch(2);

    let result = service.translate_batch(&batch).await;

    assert!(matches!(
        result,
        Err(TranslationError::Provider(ProviderError::EmptyResponse))
    ));
}

/// Test that transport failures pass through as provider errors
#[tokio::test]
async fn test_translate_batch_withFailingProvider_shouldPassErrorThrough() {
    let service = TranslationService::new(MockProvider::failing(), "translate:");
    let batch = make_batch(1);

    let result = service.translate_batch(&batch).await;

    assert!(matches!(
        result,
        Err(TranslationError::Provider(ProviderError::RequestFailed(_)))
    ));
}

/// Test that an empty batch makes no remote call at all
#[tokio::test]
async fn test_translate_batch_withEmptyBatch_shouldNotCallProvider() {
    let service = TranslationService::new(MockProvider::working(), "translate:");

    let translated = service.translate_batch(&[]).await.unwrap();

    assert!(translated.is_empty());
    assert_eq!(service.provider().call_count(), 0);
}

/// Test that override tags survive when the canned translation keeps them
#[tokio::test]
async fn test_translate_batch_withOverrideTags_shouldKeepTranslatedTags() {
    let service = TranslationService::new(
        MockProvider::with_response("你好{\\i1}世界{\\i0}"),
        "translate:",
    );
    let batch = vec![DialogueEntry::new(
        "0,0:00:01.00,0:00:03.00,Default",
        "Hello {\\i1}world{\\i0}",
    )];

    let translated = service.translate_batch(&batch).await.unwrap();

    assert_eq!(translated.len(), 1);
    assert_eq!(translated[0].text, "你好{\\i1}世界{\\i0}");
    assert_eq!(
        translated[0].override_tag_count(),
        batch[0].override_tag_count()
    );
}
