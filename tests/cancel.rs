mod tests {
    use emberstrip::CancelToken;

    #[test]
    fn test_request_is_idempotent() {
        let token = CancelToken::new();
        assert!(!token.is_requested());

        token.request();
        assert!(token.is_requested());

        token.request();
        assert!(token.is_requested());

        token.reset();
        assert!(!token.is_requested());
    }

    #[test]
    fn test_reset_on_fresh_token_is_harmless() {
        let token = CancelToken::default();
        token.reset();
        assert!(!token.is_requested());
    }

    #[test]
    fn test_request_from_another_thread() {
        static TOKEN: CancelToken = CancelToken::new();

        std::thread::spawn(|| TOKEN.request()).join().unwrap();
        assert!(TOKEN.is_requested());
        TOKEN.reset();
    }
}
