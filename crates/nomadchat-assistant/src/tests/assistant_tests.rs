#[cfg(test)]
mod assistant_tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use anyhow::Result;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use crate::assistant::{TravelAssistant, SYSTEM_PROMPT};
    use crate::client::{ChatMessage, LlmClient, SearchContextSize};

    /// Replays canned answers and records every call
    #[derive(Default)]
    struct ScriptedClient {
        answers: Mutex<VecDeque<Result<String>>>,
        calls: Mutex<Vec<(Vec<ChatMessage>, SearchContextSize)>>,
    }

    impl ScriptedClient {
        fn answering(answers: Vec<Result<String>>) -> Arc<Self> {
            Arc::new(Self {
                answers: Mutex::new(answers.into()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(Vec<ChatMessage>, SearchContextSize)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmClient for ScriptedClient {
        async fn chat_completion(
            &self,
            messages: &[ChatMessage],
            search_context: SearchContextSize,
        ) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((messages.to_vec(), search_context));
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(anyhow::anyhow!("no answer scripted")))
        }
    }

    fn ok(text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    #[test]
    fn test_system_prompt_keeps_rules_and_examples() {
        assert!(SYSTEM_PROMPT
            .starts_with("You are an EXCITED, friendly digital nomad travel assistant!"));
        assert!(SYSTEM_PROMPT.contains("RULES - FOLLOW THESE EXACTLY:"));
        assert!(SYSTEM_PROMPT.contains("(1-2 sentences max)"));
        assert!(SYSTEM_PROMPT.contains("Examples of perfect responses:"));
        assert!(SYSTEM_PROMPT.contains("\"Bali is CHEAP! $500-800/month gets you a nice place."));
        assert!(SYSTEM_PROMPT.ends_with("Be EXCITED to help but keep it SHORT and USEFUL!"));
    }

    #[tokio::test]
    async fn test_first_question_sends_system_prompt_and_question() {
        let client = ScriptedClient::answering(vec![ok("Lisbon: 200+ Mbps! 💻")]);
        let assistant = TravelAssistant::new(client.clone());

        let answer = assistant.chat("Internet in Lisbon?").await.unwrap();

        assert_eq!(answer, "Lisbon: 200+ Mbps! 💻");
        let calls = client.calls();
        assert_eq!(
            calls[0].0,
            vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user("Internet in Lisbon?"),
            ]
        );
        assert_eq!(calls[0].1, SearchContextSize::Low);
    }

    #[tokio::test]
    async fn test_previous_turns_are_replayed() {
        let client = ScriptedClient::answering(vec![ok("Yes!"), ok("About €1,200.")]);
        let assistant = TravelAssistant::new(client.clone());

        assistant.chat("Is Porto nice?").await.unwrap();
        assistant.chat("Rent there?").await.unwrap();

        let (messages, _) = &client.calls()[1];
        assert_eq!(
            messages[1..],
            [
                ChatMessage::user("Is Porto nice?"),
                ChatMessage::assistant("Yes!"),
                ChatMessage::user("Rent there?"),
            ]
        );
    }

    #[tokio::test]
    async fn test_context_keeps_only_recent_turns() {
        let answers = (0..6).map(|i| ok(&format!("answer {}", i))).collect();
        let client = ScriptedClient::answering(answers);
        let assistant = TravelAssistant::new(client.clone());

        for i in 0..6 {
            assistant.chat(&format!("question {}", i)).await.unwrap();
        }

        let context = assistant.context_messages().await;
        // system prompt + 4 turns of (user, assistant)
        assert_eq!(context.len(), 1 + 4 * 2);
        assert_eq!(context[1], ChatMessage::user("question 2"));
        assert_eq!(context[8], ChatMessage::assistant("answer 5"));
    }

    #[tokio::test]
    async fn test_custom_context_window() {
        let client = ScriptedClient::answering(vec![ok("a"), ok("b")]);
        let assistant = TravelAssistant::new(client).with_context_turns(1);

        assistant.chat("one").await.unwrap();
        assistant.chat("two").await.unwrap();

        let context = assistant.context_messages().await;
        assert_eq!(context.len(), 3);
        assert_eq!(context[1], ChatMessage::user("two"));
    }

    #[tokio::test]
    async fn test_failed_completion_is_not_recorded() {
        let client = ScriptedClient::answering(vec![Err(anyhow::anyhow!("503 upstream"))]);
        let assistant = TravelAssistant::new(client);

        let err = assistant.chat("Cheap islands?").await.unwrap_err();

        assert!(err.to_string().contains("503"));
        assert!(assistant.history().await.is_empty());
        assert_eq!(assistant.stats().await.total_conversations, 0);
    }

    #[tokio::test]
    async fn test_long_question_requests_deep_search() {
        let client = ScriptedClient::answering(vec![ok("Tbilisi!")]);
        let assistant = TravelAssistant::new(client.clone());

        let question = "I am a software developer looking for an affordable city in Europe \
                        with fast internet good food and an easy long stay visa";
        assistant.chat(question).await.unwrap();

        assert_eq!(client.calls()[0].1, SearchContextSize::High);
    }

    #[tokio::test]
    async fn test_stats_and_summary() {
        let client = ScriptedClient::answering(vec![ok("a"), ok("b")]);
        let assistant = TravelAssistant::new(client);

        assert_eq!(assistant.summary().await, "No conversation yet");
        assert_eq!(assistant.stats().await.last_activity, None);

        assistant.chat("one").await.unwrap();
        assistant.chat("two").await.unwrap();

        let stats = assistant.stats().await;
        assert_eq!(stats.total_conversations, 2);
        assert_eq!(
            stats.last_activity,
            assistant.history().await.last().map(|t| t.timestamp)
        );

        let summary = assistant.summary().await;
        assert!(summary.starts_with("2 messages • 2 searches • Started "));
    }
}
