use crate::constants::SETTLEMENT_CALCULATED;
use crate::core::errors::SplitbookError;
use crate::core::models::expense::{FundingSource, Participant};
use crate::tests::create_test_service;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_equal_split_settlement_end_to_end() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let ledger = service
        .create_ledger(
            "Trip".to_string(),
            vec!["Alice".to_string(), "Bob".to_string()],
        )
        .await
        .unwrap();
    let alice = ledger.members[0].id.clone();
    let bob = ledger.members[1].id.clone();

    service
        .record_expense(
            &ledger.id,
            &alice,
            "Hotel".to_string(),
            dec!(10000),
            FundingSource::Shared,
            None,
            vec![],
        )
        .await
        .unwrap();

    let summary = service.settle(&ledger.id, &alice).await.unwrap();

    assert_eq!(summary.ledger_id, ledger.id);
    assert_eq!(summary.ledger_name, "Trip");
    assert_eq!(summary.total_shared_expense, dec!(10000));
    assert_eq!(summary.members[0].balance, dec!(5000));
    assert_eq!(summary.members[1].balance, dec!(-5000));
    assert_eq!(summary.transactions.len(), 1);
    assert_eq!(summary.transactions[0].from_member_id, bob);
    assert_eq!(summary.transactions[0].to_member_id, alice);
    assert_eq!(summary.transactions[0].amount, dec!(5000));
    assert_eq!(summary.transactions[0].from_name, "Bob");
    assert_eq!(summary.transactions[0].to_name, "Alice");

    let logs = service.get_app_logs().await.unwrap();
    assert_eq!(logs.last().unwrap().action, SETTLEMENT_CALCULATED);
}

#[tokio::test]
async fn test_weighted_settlement_excludes_payer_from_owing() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let ledger = service
        .create_ledger(
            "Dinner club".to_string(),
            vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()],
        )
        .await
        .unwrap();
    let alice = ledger.members[0].id.clone();
    let bob = ledger.members[1].id.clone();
    let carol = ledger.members[2].id.clone();

    service
        .record_expense(
            &ledger.id,
            &alice,
            "Tasting menu".to_string(),
            dec!(9000),
            FundingSource::Shared,
            None,
            vec![
                Participant {
                    member_id: bob.clone(),
                    share_ratio: dec!(1),
                },
                Participant {
                    member_id: carol.clone(),
                    share_ratio: dec!(2),
                },
            ],
        )
        .await
        .unwrap();

    let summary = service.settle(&ledger.id, &bob).await.unwrap();

    assert_eq!(summary.members[0].balance, dec!(9000));
    assert_eq!(summary.members[1].balance, dec!(-3000));
    assert_eq!(summary.members[2].balance, dec!(-6000));

    assert_eq!(summary.transactions.len(), 2);
    assert_eq!(summary.transactions[0].from_member_id, carol);
    assert_eq!(summary.transactions[0].amount, dec!(6000));
    assert_eq!(summary.transactions[1].from_member_id, bob);
    assert_eq!(summary.transactions[1].amount, dec!(3000));
}

#[tokio::test]
async fn test_personal_expenses_only() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let ledger = service
        .create_ledger(
            "Household".to_string(),
            vec!["Alice".to_string(), "Bob".to_string()],
        )
        .await
        .unwrap();
    let alice = ledger.members[0].id.clone();

    service
        .record_expense(
            &ledger.id,
            &alice,
            "Haircut".to_string(),
            dec!(35),
            FundingSource::Personal,
            None,
            vec![],
        )
        .await
        .unwrap();

    let summary = service.settle(&ledger.id, &alice).await.unwrap();

    assert_eq!(summary.total_shared_expense, Decimal::ZERO);
    assert_eq!(summary.total_personal_expense, dec!(35));
    assert!(summary.members.iter().all(|m| m.balance.is_zero()));
    assert!(summary.transactions.is_empty());
}

#[tokio::test]
async fn test_settlement_requires_membership() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let ledger = service
        .create_ledger("Trip".to_string(), vec!["Alice".to_string()])
        .await
        .unwrap();

    let result = service.settle(&ledger.id, "outsider").await;
    assert!(matches!(result, Err(SplitbookError::NotLedgerMember(_))));
}

#[tokio::test]
async fn test_settlement_for_unknown_ledger() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let result = service.settle("missing", "anyone").await;
    assert!(matches!(result, Err(SplitbookError::LedgerNotFound(_))));
}

#[tokio::test]
async fn test_new_expense_invalidates_cached_settlement() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let ledger = service
        .create_ledger(
            "Trip".to_string(),
            vec!["Alice".to_string(), "Bob".to_string()],
        )
        .await
        .unwrap();
    let alice = ledger.members[0].id.clone();
    let bob = ledger.members[1].id.clone();

    service
        .record_expense(
            &ledger.id,
            &alice,
            "Hotel".to_string(),
            dec!(100),
            FundingSource::Shared,
            None,
            vec![],
        )
        .await
        .unwrap();

    let first = service.settle(&ledger.id, &alice).await.unwrap();
    assert_eq!(first.total_shared_expense, dec!(100));

    // Bob pays the same amount back the other way; balances level out.
    service
        .record_expense(
            &ledger.id,
            &bob,
            "Dinner".to_string(),
            dec!(100),
            FundingSource::Shared,
            None,
            vec![],
        )
        .await
        .unwrap();

    let second = service.settle(&ledger.id, &alice).await.unwrap();
    assert_eq!(second.total_shared_expense, dec!(200));
    assert!(second.members.iter().all(|m| m.balance.is_zero()));
    assert!(second.transactions.is_empty());
}

#[tokio::test]
async fn test_new_member_invalidates_cached_settlement() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let ledger = service
        .create_ledger(
            "Trip".to_string(),
            vec!["Alice".to_string(), "Bob".to_string()],
        )
        .await
        .unwrap();
    let alice = ledger.members[0].id.clone();

    service
        .record_expense(
            &ledger.id,
            &alice,
            "Hotel".to_string(),
            dec!(90),
            FundingSource::Shared,
            None,
            vec![],
        )
        .await
        .unwrap();

    let first = service.settle(&ledger.id, &alice).await.unwrap();
    assert_eq!(first.members[0].should_pay_amount, dec!(45));

    // A third member joins; the equal split widens.
    service
        .add_member(&ledger.id, "Carol".to_string())
        .await
        .unwrap();

    let second = service.settle(&ledger.id, &alice).await.unwrap();
    assert_eq!(second.members.len(), 3);
    assert_eq!(second.members[0].should_pay_amount, dec!(30));
}

#[tokio::test]
async fn test_repeated_settlement_is_stable() {
    let _ = env_logger::try_init();
    let service = create_test_service();

    let ledger = service
        .create_ledger(
            "Trip".to_string(),
            vec!["Alice".to_string(), "Bob".to_string()],
        )
        .await
        .unwrap();
    let alice = ledger.members[0].id.clone();

    service
        .record_expense(
            &ledger.id,
            &alice,
            "Hotel".to_string(),
            dec!(80),
            FundingSource::Shared,
            None,
            vec![],
        )
        .await
        .unwrap();

    // Second call is served from the cache and must match the first.
    let first = service.settle(&ledger.id, &alice).await.unwrap();
    let second = service.settle(&ledger.id, &alice).await.unwrap();

    assert_eq!(first.transactions.len(), second.transactions.len());
    assert_eq!(
        first.transactions[0].amount,
        second.transactions[0].amount
    );
    assert_eq!(
        first.transactions[0].from_member_id,
        second.transactions[0].from_member_id
    );
}
