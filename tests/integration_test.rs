use quiz_form_import::clients::{FormClient, TesseractClient, TextRecognizer};
use quiz_form_import::config::Config;
use quiz_form_import::export::{load_question_set, save_question_set};
use quiz_form_import::utils::logging;
use quiz_form_import::{segment, Question, QuestionSet};
use std::path::Path;

/// 典型的 OCR 输出：题干换行、选项合并、空行噪声
const OCR_SAMPLE: &str = "\
1. Which planet is known
as the Red Planet?

A) Venus B) Mars
C) Jupiter   D) Saturn

What is the boiling point
of water at sea level?
a. 90 C
b. 100 C
c. 110 C
Name the author of Hamlet.
";

#[test]
fn test_segment_ocr_sample() {
    let questions = segment(OCR_SAMPLE);

    assert_eq!(
        questions,
        vec![
            Question {
                text: "1. Which planet is known as the Red Planet?".to_string(),
                options: vec![
                    "A) Venus".to_string(),
                    "B) Mars".to_string(),
                    "C) Jupiter".to_string(),
                    "D) Saturn".to_string(),
                ],
            },
            Question {
                text: "What is the boiling point of water at sea level?".to_string(),
                options: vec!["a. 90 C".to_string(), "b. 100 C".to_string(), "c. 110 C".to_string()],
            },
        ]
    );
}

#[test]
fn test_options_without_prose_merge_into_one_question() {
    let questions = segment("Pick two\nA) one\nB) two\nA) again\nB) more");
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].options.len(), 4);
}

#[test]
fn test_export_round_trip_blocking() {
    let dir = tempfile::tempdir().unwrap();
    let set = QuestionSet::new("scan.jpg", segment(OCR_SAMPLE));

    let loaded = tokio_test::block_on(async {
        let path = save_question_set(dir.path(), &set).await.unwrap();
        load_question_set(&path).await.unwrap()
    });

    assert_eq!(loaded.source_image, "scan.jpg");
    assert_eq!(loaded.questions, set.questions);
    assert!(loaded.form_id.is_none());
}

#[tokio::test]
#[ignore] // 需要本机安装 tesseract，手动运行：IMAGE_PATH=... cargo test -- --ignored
async fn test_recognize_real_image() {
    logging::init(true);

    let config = Config::from_env();
    let image = config.image_path.clone().expect("请设置 IMAGE_PATH");
    let client = TesseractClient::new(&config);

    let text = client.recognize(Path::new(&image)).await.expect("识别失败");
    println!("识别出 {} 道题目", segment(&text).len());
}

#[tokio::test]
#[ignore] // 会真实修改表单，手动运行：FORM_ID=... cargo test -- --ignored
async fn test_update_real_form() {
    logging::init(true);

    let config = Config::from_env();
    let form_id = config.form_id.clone().expect("请设置 FORM_ID");
    let client = FormClient::new(&config).expect("创建表单客户端失败");

    let result = client
        .update_form(&form_id, &segment(OCR_SAMPLE))
        .await
        .expect("表单更新失败");

    assert!(result.is_success(), "表单脚本返回错误: {:?}", result.error_message());
}
