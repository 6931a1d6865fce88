//! End-to-end reveal sequences over the chat log, from the assistant reply
//! through every load-more click.

use catalog_widget::chat_log::ChatLog;
use catalog_widget::config::{INITIAL_BATCH_SIZE, LOAD_MORE_BATCH_SIZE};
use catalog_widget::pagination::{render, LoadMoreLabel, PaginationState, PaginationStore};
use shared_types::{ChatResponse, MessageId, ProfileRecord};

fn records(count: usize) -> Vec<ProfileRecord> {
    (1..=count)
        .map(|n| ProfileRecord::with_code(format!("AP{n:04}")))
        .collect()
}

fn reply_text(count: usize) -> String {
    let mut text = format!("{count} profil bulundu:\n\n");
    for n in 1..=count {
        text.push_str(&format!(
            "**{n}. AP{n:04}**\n![AP{n:04}](http://localhost:8002/api/profile-image/AP{n:04})\n• Kategori: Kutu\n\n"
        ));
    }
    text
}

#[test]
fn thirty_seven_results_reveal_in_three_steps() {
    let mut log = ChatLog::new(50);
    let id = log.push_assistant(&reply_text(37), records(37));

    let entry = log
        .entries()
        .find(|e| e.message.id == id)
        .expect("reply in log");
    assert_eq!(entry.html.matches("<img").count(), 15);

    let state = log.pagination().get(&id).expect("paginated");
    assert_eq!(
        state.control(),
        Some(LoadMoreLabel {
            next_batch: 15,
            remaining: 22
        })
    );
    assert_eq!(
        state.control().unwrap().to_string(),
        "15 Profil Daha Göster (22 kaldı)"
    );

    let first = log.pagination_mut().reveal_next(&id).expect("second batch");
    assert_eq!(first.appended, 15);
    assert_eq!(first.revealed, 30);
    assert_eq!(
        first.next,
        Some(LoadMoreLabel {
            next_batch: 7,
            remaining: 7
        })
    );

    let second = log.pagination_mut().reveal_next(&id).expect("last batch");
    assert_eq!(second.appended, 7);
    assert_eq!(second.revealed, 37);
    assert!(second.is_complete());

    let snapshot = log.pagination().get(&id).unwrap().snapshot();
    assert!(snapshot.control.is_none());
    let ordinals: Vec<usize> = snapshot.revealed.iter().map(|p| p.ordinal).collect();
    assert_eq!(ordinals, (16..=37).collect::<Vec<_>>());
    assert_eq!(snapshot.revealed[0].record.code, "AP0016");
    assert_eq!(snapshot.revealed[21].record.code, "AP0037");

    assert!(log.pagination_mut().reveal_next(&id).is_none());
}

#[test]
fn reveal_starts_after_the_images_actually_shown() {
    // The reply text only carries four images for a twenty-profile list
    let mut log = ChatLog::new(50);
    let id = log.push_assistant(&reply_text(4), records(20));

    let entry = log.entries().find(|e| e.message.id == id).unwrap();
    assert_eq!(entry.html.matches("<img").count(), 4);

    let state = log.pagination().get(&id).expect("paginated");
    assert_eq!(state.revealed_count(), 4);
    assert_eq!(
        state.control().unwrap().to_string(),
        "15 Profil Daha Göster (16 kaldı)"
    );

    let first = log.pagination_mut().reveal_next(&id).expect("first batch");
    assert_eq!(first.appended, 15);
    assert_eq!(first.revealed, 19);

    let revealed = log.pagination().get(&id).unwrap().synthesized();
    let ordinals: Vec<usize> = revealed.iter().map(|p| p.ordinal).collect();
    assert_eq!(ordinals, (5..=19).collect::<Vec<_>>());
    let codes: Vec<&str> = revealed.iter().map(|p| p.record.code.as_str()).collect();
    let expected: Vec<String> = (5..=19).map(|n| format!("AP{n:04}")).collect();
    assert_eq!(codes, expected);

    let second = log.pagination_mut().reveal_next(&id).expect("last profile");
    assert_eq!(second.appended, 1);
    assert_eq!(second.revealed, 20);
    assert!(second.is_complete());

    let snapshot = log.pagination().get(&id).unwrap().snapshot();
    assert!(snapshot.control.is_none());
    let last = snapshot.revealed.last().unwrap();
    assert_eq!(last.ordinal, 20);
    assert_eq!(last.record.code, "AP0020");
}

#[test]
fn ordinals_cover_the_whole_list_for_any_batch_size() {
    for total in [16usize, 29, 30, 31, 60, 101] {
        for batch in [1usize, 4, 15, 50] {
            let rendered = render(&reply_text(total), records(total), INITIAL_BATCH_SIZE, batch);
            let state = rendered.pagination.expect("paginated");

            let id = MessageId::new();
            let mut store = PaginationStore::new();
            store.insert(id.clone(), state);

            let mut previous = INITIAL_BATCH_SIZE;
            while let Some(outcome) = store.reveal_next(&id) {
                assert!(outcome.revealed > previous);
                assert!(outcome.appended <= batch);
                previous = outcome.revealed;
            }

            let state = store.get(&id).unwrap();
            assert_eq!(state.revealed_count(), total);
            let ordinals: Vec<usize> = state.synthesized().iter().map(|p| p.ordinal).collect();
            assert_eq!(ordinals, (INITIAL_BATCH_SIZE + 1..=total).collect::<Vec<_>>());
        }
    }
}

#[test]
fn ten_results_need_no_control() {
    let mut log = ChatLog::new(50);
    let id = log.push_assistant(&reply_text(10), records(10));

    assert!(log.pagination().get(&id).is_none());
    let entry = log.entries().find(|e| e.message.id == id).unwrap();
    assert_eq!(entry.html.matches("<img").count(), 10);
}

#[test]
fn empty_results_need_no_control() {
    let rendered = render("Sonuç bulunamadı.", Vec::new(), INITIAL_BATCH_SIZE, LOAD_MORE_BATCH_SIZE);
    assert!(rendered.pagination.is_none());
}

#[test]
fn revealed_count_only_grows() {
    let id = MessageId::new();
    let mut store = PaginationStore::new();
    store.insert(id.clone(), PaginationState::new(records(47), 15, 15));

    let mut seen = vec![store.get(&id).unwrap().revealed_count()];
    for _ in 0..10 {
        store.reveal_next(&id);
        seen.push(store.get(&id).unwrap().revealed_count());
    }

    assert!(seen.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(seen.last().copied(), Some(47));
    assert_eq!(&seen[..5], &[15, 30, 45, 47, 47]);
}

#[test]
fn reply_decoded_from_backend_json_paginates() {
    let profiles: Vec<serde_json::Value> = (1..=20)
        .map(|n| {
            serde_json::json!({
                "code": format!("AP{n:04}"),
                "category": "Kutu",
                "customer": "STANDART",
                "mold_status": "Mevcut",
            })
        })
        .collect();
    let body = serde_json::json!({
        "message": reply_text(20),
        "profile_data": profiles,
        "conversation_history": [{"role": "user", "content": "100 kutu"}],
    });

    let response: ChatResponse = serde_json::from_value(body).expect("valid reply");
    let mut log = ChatLog::new(50);
    if let Some(history) = response.conversation_history {
        log.replace_history(history);
    }
    let id = log.push_assistant(&response.message, response.profile_data.unwrap_or_default());

    assert_eq!(log.history_for_request().map(|h| h.len()), Some(1));
    let outcome = log.pagination_mut().reveal_next(&id).expect("rest revealed");
    assert_eq!(outcome.appended, 5);
    assert!(outcome.is_complete());

    let snapshot = log.pagination().get(&id).unwrap().snapshot();
    assert_eq!(snapshot.revealed[0].ordinal, 16);
    assert_eq!(snapshot.revealed[0].record.mold_status.as_deref(), Some("Mevcut"));
}
