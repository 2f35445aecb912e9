use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw2::set_contract_version;

use common::{GlobalFeeResponse, RelayMessage, SubmissionResponse};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{
    Config, Submission, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NONCE, SUBMISSIONS,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
            fee_denom: msg.fee_denom.clone(),
            global_fixed_native_fee: msg.global_fixed_native_fee,
            paused: false,
        },
    )?;
    NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("fee_denom", msg.fee_denom)
        .add_attribute("global_fixed_native_fee", msg.global_fixed_native_fee))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Send(message) => execute_send(deps, info, message),
        ExecuteMsg::SetGlobalFixedNativeFee { fee } => execute_set_fee(deps, info, fee),
        ExecuteMsg::SetPaused { paused } => execute_set_paused(deps, info, paused),
    }
}

fn execute_send(
    deps: DepsMut,
    info: MessageInfo,
    message: RelayMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }

    if message.fallback_address.is_empty() {
        return Err(ContractError::MissingFallback);
    }

    let paid = info
        .funds
        .iter()
        .filter(|c| c.denom == config.fee_denom)
        .map(|c| c.amount)
        .sum::<Uint128>();
    let required = config
        .global_fixed_native_fee
        .checked_add(message.execution_fee)
        .map_err(StdError::from)?;
    if paid < required {
        return Err(ContractError::InsufficientFee {
            expected: required,
            got: paid,
            denom: config.fee_denom,
        });
    }

    let nonce = NONCE.load(deps.storage)?;
    NONCE.save(deps.storage, &(nonce + 1))?;

    SUBMISSIONS.save(
        deps.storage,
        nonce,
        &Submission {
            sender: info.sender.clone(),
            message: message.clone(),
            funds: paid,
        },
    )?;

    let sent = Event::new("Sent")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", info.sender.as_str())
        .add_attribute("native_fee", config.global_fixed_native_fee)
        .add_attribute("funds", paid);

    // Tuple order: execution_fee, flags, fallback_address, payload
    let log = Event::new("Log")
        .add_attribute("execution_fee", message.execution_fee)
        .add_attribute("flags", message.flags.to_string())
        .add_attribute("fallback_address", message.fallback_address)
        .add_attribute("payload", format!("0x{}", hex::encode(message.payload)));

    Ok(Response::new()
        .add_event(sent)
        .add_event(log)
        .add_attribute("action", "send")
        .add_attribute("nonce", nonce.to_string()))
}

fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.global_fixed_native_fee = fee;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_global_fixed_native_fee")
        .add_attribute("fee", fee))
}

fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_paused")
        .add_attribute("paused", paused.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GlobalFixedNativeFee {} => to_json_binary(&query_global_fee(deps)?),
        QueryMsg::Submission { nonce } => to_json_binary(&query_submission(deps, nonce)?),
    }
}

fn query_global_fee(deps: Deps) -> StdResult<GlobalFeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(GlobalFeeResponse {
        fee: config.global_fixed_native_fee,
        denom: config.fee_denom,
    })
}

fn query_submission(deps: Deps, nonce: u64) -> StdResult<Option<SubmissionResponse>> {
    let submission = SUBMISSIONS.may_load(deps.storage, nonce)?;
    Ok(submission.map(|s| SubmissionResponse {
        nonce,
        sender: s.sender.to_string(),
        message: s.message,
        funds: s.funds,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coins, from_json};

    fn setup(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                fee_denom: "uluna".to_string(),
                global_fixed_native_fee: Uint128::new(1_000),
            },
        )
        .unwrap();
    }

    fn relay_message(execution_fee: u128) -> RelayMessage {
        RelayMessage {
            execution_fee: Uint128::new(execution_fee),
            flags: 6,
            fallback_address: "0x00000000000000000000000000000000000000aa".to_string(),
            payload: Binary::from(vec![0xde, 0xad]),
        }
    }

    #[test]
    fn test_send_records_submission_and_emits_log() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &coins(31_000, "uluna")),
            ExecuteMsg::Send(relay_message(30_000)),
        )
        .unwrap();

        let log = res.events.iter().find(|e| e.ty == "Log").unwrap();
        let values: Vec<&str> = log.attributes.iter().map(|a| a.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "30000",
                "6",
                "0x00000000000000000000000000000000000000aa",
                "0xdead"
            ]
        );
        assert!(res.events.iter().any(|e| e.ty == "Sent"));

        let stored: Option<SubmissionResponse> = from_json(
            query(deps.as_ref(), mock_env(), QueryMsg::Submission { nonce: 0 }).unwrap(),
        )
        .unwrap();
        let stored = stored.unwrap();
        assert_eq!(stored.sender, "bridge");
        assert_eq!(stored.funds, Uint128::new(31_000));
        assert_eq!(stored.message, relay_message(30_000));
    }

    #[test]
    fn test_send_rejects_insufficient_fee() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &coins(30_999, "uluna")),
            ExecuteMsg::Send(relay_message(30_000)),
        )
        .unwrap_err();

        assert_eq!(
            err,
            ContractError::InsufficientFee {
                expected: Uint128::new(31_000),
                got: Uint128::new(30_999),
                denom: "uluna".to_string(),
            }
        );
    }

    #[test]
    fn test_send_ignores_foreign_denoms() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &coins(1_000_000, "uusd")),
            ExecuteMsg::Send(relay_message(0)),
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InsufficientFee { .. }));
    }

    #[test]
    fn test_only_admin_sets_fee() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("someone", &[]),
            ExecuteMsg::SetGlobalFixedNativeFee {
                fee: Uint128::zero(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetGlobalFixedNativeFee {
                fee: Uint128::new(5),
            },
        )
        .unwrap();

        let fee: GlobalFeeResponse = from_json(
            query(deps.as_ref(), mock_env(), QueryMsg::GlobalFixedNativeFee {}).unwrap(),
        )
        .unwrap();
        assert_eq!(fee.fee, Uint128::new(5));
        assert_eq!(fee.denom, "uluna");
    }

    #[test]
    fn test_send_with_overflowing_fee_is_rejected() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let mut message = relay_message(0);
        message.execution_fee = Uint128::MAX;
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &coins(1_000_000, "uluna")),
            ExecuteMsg::Send(message),
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Std(StdError::Overflow { .. })));
    }

    #[test]
    fn test_paused_gateway_refuses_send() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("someone", &[]),
            ExecuteMsg::SetPaused { paused: true },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetPaused { paused: true },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &coins(31_000, "uluna")),
            ExecuteMsg::Send(relay_message(30_000)),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Paused);

        // Fee quotes stay available while paused
        let fee: GlobalFeeResponse = from_json(
            query(deps.as_ref(), mock_env(), QueryMsg::GlobalFixedNativeFee {}).unwrap(),
        )
        .unwrap();
        assert_eq!(fee.fee, Uint128::new(1_000));
    }
}
