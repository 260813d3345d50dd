//! シナリオテスト（Stub のポートで App を組み立てて通しで動かす）


mod match_service_tests;
