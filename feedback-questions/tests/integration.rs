//! Integration tests for feedback-questions

use feedback_questions::{
    AnswerEditor, DetailsEditor, EditEvent, FeedbackParticipantType, McqAnswerEditor,
    McqQuestionDetails, McqResponseDetails, MsqDetailsEditor, MsqQuestionDetails, NO_VALUE,
    QuestionDetails, QuestionEditor, RankOptionsAnswerEditor, RankOptionsQuestionDetails,
    RankOptionsResponseDetails, ResponseDetails, ScriptError, ScriptedHost, ValidationWarning,
};

#[test]
fn test_rank_two_options_both_first() {
    let mut editor = RankOptionsAnswerEditor::initialize(
        RankOptionsQuestionDetails::new(["Apple", "Banana"]).with_bounds(1, 1),
        RankOptionsResponseDetails::default(),
    );

    editor.set_rank(0, 1);
    editor.set_rank(1, 1);

    assert!(editor.has_duplicate_ranks());
    assert!(editor.is_above_maximum());
    assert!(!editor.is_below_minimum());
}

#[test]
fn test_rank_response_survives_option_removal() -> anyhow::Result<()> {
    let stored =
        ResponseDetails::from_json(r#"{"questionType":"RANK_OPTIONS","answers":[2,0,1,3]}"#)?;
    let question = RankOptionsQuestionDetails::new(["A", "B", "C"]).into();

    let editor = QuestionEditor::for_answer(question, stored)?;
    let Some(ResponseDetails::RankOptions(response)) = editor.response_details() else {
        panic!("Expected a rank options response");
    };
    assert_eq!(response.ranks(), vec![2, 0, 1]);
    Ok(())
}

#[test]
fn test_mcq_scripted_session() -> anyhow::Result<()> {
    let mut editor = QuestionEditor::for_answer(
        McqQuestionDetails::new(["Agree", "Neutral", "Disagree"])
            .with_other_enabled()
            .into(),
        McqResponseDetails::default().into(),
    )?;

    let warnings = ScriptedHost::new()
        .with_selection(0)
        .with_selection(2)
        .with_other_toggle()
        .with_other_text("It depends")
        .run(&mut editor)?;
    assert!(warnings.is_empty());

    let response = editor.response_details().unwrap().to_json()?;
    let json: serde_json::Value = serde_json::from_str(&response)?;
    assert_eq!(json["questionType"], "MCQ");
    assert_eq!(json["answer"], "");
    assert_eq!(json["isOther"], true);
    assert_eq!(json["otherFieldContent"], "It depends");
    Ok(())
}

#[test]
fn test_mcq_reload_after_choice_removed() -> anyhow::Result<()> {
    let question = McqQuestionDetails::new(["Agree", "Disagree"]);
    let editor = McqAnswerEditor::initialize(question, McqResponseDetails::with_answer("Neutral"));

    assert_eq!(editor.option_selection(), vec![false, false]);
    assert!(!editor.is_other());
    assert_eq!(editor.answer(), "");

    let json = ResponseDetails::from(editor.into_response()).to_json()?;
    assert_eq!(
        json,
        r#"{"questionType":"MCQ","answer":"","isOther":false,"otherFieldContent":""}"#
    );
    Ok(())
}

#[test]
fn test_scripted_host_reports_failing_step() {
    let mut editor = QuestionEditor::for_answer(
        McqQuestionDetails::new(["Yes", "No"]).into(),
        McqResponseDetails::default().into(),
    )
    .unwrap();

    let result = ScriptedHost::new()
        .with_selection(1)
        .with_rank(0, 1)
        .run(&mut editor);

    match result {
        Err(ScriptError::StepFailed { step, event, .. }) => {
            assert_eq!(step, 1);
            assert_eq!(event, "SetRank");
        }
        other => panic!("Expected a failed step, got {other:?}"),
    }

    // The first step stays applied.
    let QuestionEditor::McqAnswer(mcq) = editor else {
        panic!("Expected MCQ answer editor");
    };
    assert_eq!(mcq.answer(), "No");
}

#[test]
fn test_msq_details_edit_round_trip() -> anyhow::Result<()> {
    let stored = r#"{
        "questionType": "MSQ",
        "questionText": "Which tools do you use?",
        "msqChoices": ["git", "make", "cargo"],
        "otherEnabled": false,
        "hasAssignedWeights": true,
        "msqWeights": [1, 2, 3],
        "msqOtherWeight": 0,
        "generateOptionsFor": "NONE",
        "minSelectableChoices": -2147483648,
        "maxSelectableChoices": -2147483648
    }"#;
    let mut editor = QuestionEditor::for_details(QuestionDetails::from_json(stored)?)?;

    ScriptedHost::new()
        .with_reorder(0, 2)
        .with_event(EditEvent::ToggleMaxSelectable(true))
        .with_event(EditEvent::ToggleMinSelectable(true))
        .with_event(EditEvent::SetGeneratedOptionsFor(
            FeedbackParticipantType::Instructors,
        ))
        .run(&mut editor)?;

    let json: serde_json::Value = serde_json::from_str(&editor.question_details().to_json()?)?;
    assert_eq!(json["msqChoices"], serde_json::json!(["make", "cargo", "git"]));
    assert_eq!(json["msqWeights"], serde_json::json!([2.0, 3.0, 1.0]));
    assert_eq!(json["maxSelectableChoices"], 2);
    assert_eq!(json["minSelectableChoices"], 1);
    assert_eq!(json["generateOptionsFor"], "INSTRUCTORS");
    Ok(())
}

#[test]
fn test_msq_disabling_constraints_writes_no_value() -> anyhow::Result<()> {
    let mut editor = MsqDetailsEditor::initialize(
        MsqQuestionDetails::new(["a", "b"])
            .with_max_selectable(2)
            .with_min_selectable(1),
    )?;
    editor.toggle_max_selectable(false);
    editor.toggle_min_selectable(false);

    let json = serde_json::to_value(editor.into_details())?;
    assert_eq!(json["maxSelectableChoices"], NO_VALUE);
    assert_eq!(json["minSelectableChoices"], NO_VALUE);
    Ok(())
}

#[test]
fn test_rank_warnings_through_host() {
    let mut editor = QuestionEditor::for_answer(
        RankOptionsQuestionDetails::new(["A", "B", "C"])
            .with_bounds(2, 0)
            .into(),
        RankOptionsResponseDetails::default().into(),
    )
    .unwrap();

    let warnings = ScriptedHost::new().with_rank(2, 1).run(&mut editor).unwrap();
    assert_eq!(warnings, vec![ValidationWarning::TooFewRanked { min: 2 }]);

    let warnings = ScriptedHost::new().with_rank(0, 2).run(&mut editor).unwrap();
    assert!(warnings.is_empty());

    let warnings = ScriptedHost::new()
        .with_rank(0, 0)
        .with_rank(2, 0)
        .run(&mut editor)
        .unwrap();
    assert!(warnings.is_empty());
}
